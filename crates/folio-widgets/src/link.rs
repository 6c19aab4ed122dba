//! External link widget.
//!
//! Links are protocol-relative: the entry `demo.com` becomes `//demo.com`,
//! which the host resolves against the scheme of the page it is showing.

use folio_core::{
    html, AccessibleRole, Brick, BrickAssertion, BrickVerification, Canvas, Color, Constraints,
    Event, LayoutResult, MouseButton, Rect, Size, TextStyle, TypeId, Widget,
};
use std::any::Any;

/// Where an activated link should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkTarget {
    /// Current browsing context
    SameContext,
    /// New browsing context
    #[default]
    Blank,
}

impl LinkTarget {
    /// Value of the `target` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SameContext => "_self",
            Self::Blank => "_blank",
        }
    }
}

/// Message emitted when a link is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkActivated {
    /// Destination as written in the markup
    pub href: String,
    /// Where to open it
    pub target: LinkTarget,
}

impl LinkActivated {
    /// Absolute URL for `scheme` (e.g. `https`).
    #[must_use]
    pub fn resolve(&self, scheme: &str) -> String {
        resolve_href(&self.href, scheme)
    }
}

fn resolve_href(href: &str, scheme: &str) -> String {
    match href.strip_prefix("//") {
        Some(rest) => format!("{scheme}://{rest}"),
        None => href.to_string(),
    }
}

/// Underlined text that navigates to `href` when clicked.
#[derive(Debug, Clone)]
pub struct Link {
    label: String,
    href: String,
    target: LinkTarget,
    color: Color,
    font_size: f32,
    pressed: bool,
    bounds: Rect,
}

impl Link {
    /// Protocol-relative link to `entry`, opening in a new context and
    /// labelled with the entry itself.
    #[must_use]
    pub fn external(entry: &str) -> Self {
        Self {
            label: entry.to_string(),
            href: format!("//{entry}"),
            target: LinkTarget::Blank,
            color: Color::BLACK,
            font_size: 14.0,
            pressed: false,
            bounds: Rect::default(),
        }
    }

    /// Set text color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set font size.
    #[must_use]
    pub const fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Destination as written in the markup.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Visible text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Where the link opens.
    #[must_use]
    pub const fn target(&self) -> LinkTarget {
        self.target
    }

    /// Absolute URL for `scheme`.
    #[must_use]
    pub fn resolve(&self, scheme: &str) -> String {
        resolve_href(&self.href, scheme)
    }

    fn style(&self) -> TextStyle {
        TextStyle {
            size: self.font_size,
            color: self.color,
            underline: true,
            ..TextStyle::default()
        }
    }
}

impl Widget for Link {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = self.label.chars().count() as f32 * self.font_size * 0.6;
        constraints.constrain(Size::new(width, self.font_size * 1.6))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text(&self.label, self.bounds.origin(), &self.style());
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                self.pressed = self.bounds.contains_point(position);
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let was_pressed = self.pressed;
                self.pressed = false;
                if was_pressed && self.bounds.contains_point(position) {
                    tracing::debug!(href = %self.href, "link activated");
                    Some(Box::new(LinkActivated {
                        href: self.href.clone(),
                        target: self.target,
                    }))
                } else {
                    None
                }
            }
            Event::MouseLeave => {
                self.pressed = false;
                None
            }
            _ => None,
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.label)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Link
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for Link {
    fn brick_name(&self) -> &'static str {
        "Link"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[BrickAssertion::TextVisible, BrickAssertion::MaxLatencyMs(16)]
    }

    fn verify(&self) -> BrickVerification {
        let mut verification = BrickVerification::default();
        for assertion in self.assertions() {
            match assertion {
                BrickAssertion::TextVisible if self.label.is_empty() => verification
                    .failed
                    .push((assertion.clone(), "link label is empty".to_string())),
                _ => verification.passed.push(assertion.clone()),
            }
        }
        verification
    }

    fn to_html(&self) -> String {
        format!(
            r#"<a href="{}" target="{}" rel="noopener noreferrer">{}</a>"#,
            html::escape(&self.href),
            self.target.as_str(),
            html::escape(&self.label)
        )
    }

    fn to_css(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{DrawCommand, Point, RecordingCanvas};

    fn laid_out(entry: &str) -> Link {
        let mut link = Link::external(entry);
        link.layout(Rect::new(0.0, 0.0, 100.0, 20.0));
        link
    }

    fn down(x: f32, y: f32) -> Event {
        Event::MouseDown {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn up(x: f32, y: f32) -> Event {
        Event::MouseUp {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    #[test]
    fn test_external_is_protocol_relative() {
        let link = Link::external("example.com/x");
        assert_eq!(link.href(), "//example.com/x");
        assert_eq!(link.label(), "example.com/x");
        assert_eq!(link.target(), LinkTarget::Blank);
    }

    #[test]
    fn test_resolve_uses_scheme() {
        assert_eq!(Link::external("demo.com").resolve("https"), "https://demo.com");
        let msg = LinkActivated {
            href: "/local".into(),
            target: LinkTarget::SameContext,
        };
        assert_eq!(msg.resolve("http"), "/local");
    }

    #[test]
    fn test_html() {
        assert_eq!(
            Link::external("a.io?x=1&y=2").to_html(),
            r#"<a href="//a.io?x=1&amp;y=2" target="_blank" rel="noopener noreferrer">a.io?x=1&amp;y=2</a>"#
        );
    }

    #[test]
    fn test_click_emits_activation() {
        let mut link = laid_out("demo.com");
        assert!(link.event(&down(5.0, 5.0)).is_none());
        let msg = link.event(&up(6.0, 5.0)).expect("message");
        let activated = msg.downcast::<LinkActivated>().expect("LinkActivated");
        assert_eq!(activated.href, "//demo.com");
        assert_eq!(activated.target, LinkTarget::Blank);
    }

    #[test]
    fn test_release_outside_does_nothing() {
        let mut link = laid_out("demo.com");
        link.event(&down(5.0, 5.0));
        assert!(link.event(&up(500.0, 5.0)).is_none());
    }

    #[test]
    fn test_release_without_press_does_nothing() {
        let mut link = laid_out("demo.com");
        assert!(link.event(&up(5.0, 5.0)).is_none());
    }

    #[test]
    fn test_paint_underlined() {
        let link = laid_out("demo.com");
        let mut canvas = RecordingCanvas::new();
        link.paint(&mut canvas);
        match &canvas.commands()[0] {
            DrawCommand::Text { content, style, .. } => {
                assert_eq!(content, "demo.com");
                assert!(style.underline);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_empty_label_fails_verification() {
        assert!(!Link::external("").can_render());
        assert!(Link::external("demo.com").can_render());
    }
}
