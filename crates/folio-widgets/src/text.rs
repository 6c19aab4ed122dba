//! Text widget for headings, paragraphs and inline tags.

use folio_core::{
    html, AccessibleRole, Brick, BrickAssertion, Canvas, Color, Constraints, Event, FontWeight,
    LayoutResult, Rect, Size, TextStyle, TypeId, Widget,
};
use std::any::Any;

/// Element the text is emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTag {
    /// Top-level heading
    H1,
    /// Paragraph
    P,
    /// Inline run
    #[default]
    Span,
    /// Block run
    Div,
}

impl TextTag {
    /// Element name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::P => "p",
            Self::Span => "span",
            Self::Div => "div",
        }
    }
}

/// Styled text run.
#[derive(Debug, Clone)]
pub struct Text {
    /// Text content
    content: String,
    /// Element kind
    tag: TextTag,
    /// CSS class hook
    class: Option<String>,
    /// Surround the content with single spaces in markup
    padded: bool,
    /// Text color
    color: Color,
    /// Font size in pixels
    font_size: f32,
    /// Font weight
    font_weight: FontWeight,
    /// Font family stack
    font_family: Option<String>,
    /// Line height multiplier
    line_height: f32,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
}

impl Text {
    /// Create a new inline text run.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: TextTag::Span,
            class: None,
            padded: false,
            color: Color::BLACK,
            font_size: 16.0,
            font_weight: FontWeight::Normal,
            font_family: None,
            line_height: 1.6,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the element kind.
    #[must_use]
    pub const fn tag(mut self, tag: TextTag) -> Self {
        self.tag = tag;
        self
    }

    /// Set the CSS class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Pad the markup content with a space on each side.
    #[must_use]
    pub const fn padded(mut self, padded: bool) -> Self {
        self.padded = padded;
        self
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

    /// Set font weight.
    #[must_use]
    pub const fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Set the font family stack.
    #[must_use]
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set line height multiplier.
    #[must_use]
    pub const fn line_height(mut self, multiplier: f32) -> Self {
        self.line_height = multiplier;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    fn style(&self) -> TextStyle {
        TextStyle {
            size: self.font_size,
            color: self.color,
            weight: self.font_weight,
            family: self.font_family.clone(),
            underline: false,
        }
    }

    /// Estimate text size (~0.6em per character, wrapping at `max_width`).
    fn estimate_size(&self, max_width: f32) -> Size {
        let char_width = self.font_size * 0.6;
        let line_height = self.font_size * self.line_height;

        if self.content.is_empty() {
            return Size::ZERO;
        }

        let total_width = self.content.chars().count() as f32 * char_width;
        if max_width.is_finite() && total_width > max_width && max_width > 0.0 {
            let lines = (total_width / max_width).ceil();
            return Size::new(max_width, lines * line_height);
        }
        Size::new(total_width, line_height)
    }
}

impl Widget for Text {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.estimate_size(constraints.max_width))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.content.is_empty() {
            return;
        }
        canvas.draw_text(&self.content, self.bounds.origin(), &self.style());
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn accessible_name(&self) -> Option<&str> {
        if self.content.is_empty() {
            None
        } else {
            Some(&self.content)
        }
    }

    fn accessible_role(&self) -> AccessibleRole {
        match self.tag {
            TextTag::H1 => AccessibleRole::Heading,
            _ => AccessibleRole::Generic,
        }
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for Text {
    fn brick_name(&self) -> &'static str {
        "Text"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[BrickAssertion::MaxLatencyMs(16)]
    }

    fn to_html(&self) -> String {
        let tag = self.tag.as_str();
        let class = self
            .class
            .as_deref()
            .map(|c| format!(r#" class="{}""#, html::escape(c)))
            .unwrap_or_default();
        let content = html::escape(&self.content);
        if self.padded {
            format!("<{tag}{class}> {content} </{tag}>")
        } else {
            format!("<{tag}{class}>{content}</{tag}>")
        }
    }

    fn to_css(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{DrawCommand, Point, RecordingCanvas};

    #[test]
    fn test_text_builder() {
        let t = Text::new("Demo")
            .tag(TextTag::H1)
            .class("folio-title")
            .font_size(24.0)
            .font_weight(FontWeight::Medium)
            .with_test_id("title");
        assert_eq!(t.content(), "Demo");
        assert!(t.to_html().starts_with(r#"<h1 class="folio-title">"#));
        assert_eq!(Widget::test_id(&t), Some("title"));
        assert_eq!(t.accessible_role(), AccessibleRole::Heading);
    }

    #[test]
    fn test_html_verbatim_and_escaped() {
        let t = Text::new("Tom & <Jerry>").tag(TextTag::P).class("folio-description");
        assert_eq!(
            t.to_html(),
            r#"<p class="folio-description">Tom &amp; &lt;Jerry&gt;</p>"#
        );
    }

    #[test]
    fn test_html_padded_span() {
        let t = Text::new("game").class("folio-type").padded(true);
        assert_eq!(t.to_html(), r#"<span class="folio-type"> game </span>"#);
    }

    #[test]
    fn test_html_without_class() {
        assert_eq!(Text::new(" | ").to_html(), "<span> | </span>");
    }

    #[test]
    fn test_measure_empty_is_zero() {
        let t = Text::new("");
        assert_eq!(t.measure(Constraints::width_bound(300.0)), Size::ZERO);
    }

    #[test]
    fn test_measure_wraps_at_max_width() {
        let t = Text::new("x".repeat(100)).font_size(10.0).line_height(1.0);
        let size = t.measure(Constraints::width_bound(120.0));
        assert_eq!(size.width, 120.0);
        // 100 chars * 6px = 600px -> 5 lines of 10px
        assert_eq!(size.height, 50.0);
    }

    #[test]
    fn test_paint_draws_at_origin() {
        let mut t = Text::new("Demo").color(Color::WHITE);
        t.layout(Rect::new(5.0, 6.0, 100.0, 20.0));
        let mut canvas = RecordingCanvas::new();
        t.paint(&mut canvas);
        match &canvas.commands()[0] {
            DrawCommand::Text {
                content,
                position,
                style,
            } => {
                assert_eq!(content, "Demo");
                assert_eq!(*position, Point::new(5.0, 6.0));
                assert_eq!(style.color, Color::WHITE);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_paint_empty_draws_nothing() {
        let mut t = Text::new("");
        t.layout(Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut canvas = RecordingCanvas::new();
        t.paint(&mut canvas);
        assert!(canvas.is_empty());
    }
}
