//! Group widget: a row or column of children wrapped in one element.

use folio_core::{
    html, AccessibleRole, Brick, BrickAssertion, Canvas, Color, Constraints, Event, LayoutResult,
    Point, Rect, Size, TextStyle, TypeId, Widget,
};
use std::any::Any;

/// Direction children are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Left to right, wrapping to a new line when out of width
    Horizontal,
    /// Top to bottom
    #[default]
    Vertical,
}

/// Container of child widgets.
pub struct Group {
    /// Element name (`div`, `span`, `ul`, `li`)
    tag: String,
    /// CSS class hook
    class: Option<String>,
    /// Layout direction
    axis: Axis,
    /// Gap between children
    gap: f32,
    /// Text painted between consecutive children
    separator: Option<String>,
    /// Separator color
    separator_color: Color,
    /// Accessible role
    role: AccessibleRole,
    /// Children widgets
    children: Vec<Box<dyn Widget>>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
    /// Cached separator positions
    separator_positions: Vec<Point>,
}

impl Default for Group {
    fn default() -> Self {
        Self::new("div")
    }
}

impl Group {
    /// Create an empty vertical group emitted as `tag`.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            axis: Axis::Vertical,
            gap: 0.0,
            separator: None,
            separator_color: Color::BLACK,
            role: AccessibleRole::Generic,
            children: Vec::new(),
            test_id_value: None,
            bounds: Rect::default(),
            separator_positions: Vec::new(),
        }
    }

    /// Horizontal group emitted as `tag`.
    #[must_use]
    pub fn row(tag: impl Into<String>) -> Self {
        Self::new(tag).axis(Axis::Horizontal)
    }

    /// Set the CSS class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set layout direction.
    #[must_use]
    pub const fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the gap between children.
    #[must_use]
    pub const fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Paint `text` between consecutive children.
    #[must_use]
    pub fn separator(mut self, text: impl Into<String>, color: Color) -> Self {
        self.separator = Some(text.into());
        self.separator_color = color;
        self
    }

    /// Set the accessible role.
    #[must_use]
    pub const fn role(mut self, role: AccessibleRole) -> Self {
        self.role = role;
        self
    }

    /// Add a child widget.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    /// Add every widget from an iterator.
    #[must_use]
    pub fn children_from<W, I>(mut self, widgets: I) -> Self
    where
        W: Widget + 'static,
        I: IntoIterator<Item = W>,
    {
        self.children
            .extend(widgets.into_iter().map(|w| Box::new(w) as Box<dyn Widget>));
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Element name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    fn separator_width(&self) -> f32 {
        self.separator
            .as_ref()
            .map_or(0.0, |s| s.chars().count() as f32 * self.separator_style().size * 0.6)
    }

    fn separator_style(&self) -> TextStyle {
        TextStyle {
            size: 14.0,
            color: self.separator_color,
            ..TextStyle::default()
        }
    }

    fn spacing(&self) -> f32 {
        self.gap + self.separator_width()
    }

    /// Place children, returning the occupied size. Horizontal groups wrap
    /// to a new line when the next child would overflow `max_width`.
    fn arrange(&self, origin: Point, max_width: f32) -> (Vec<Rect>, Vec<Point>, Size) {
        let child_constraints = Constraints::width_bound(max_width);
        let spacing = self.spacing();
        let mut placed = Vec::with_capacity(self.children.len());
        let mut separators = Vec::new();

        match self.axis {
            Axis::Vertical => {
                let mut y = origin.y;
                let mut width = 0.0f32;
                for (i, child) in self.children.iter().enumerate() {
                    if i > 0 {
                        y += self.gap;
                    }
                    let size = child.measure(child_constraints);
                    placed.push(Rect::new(origin.x, y, size.width, size.height));
                    y += size.height;
                    width = width.max(size.width);
                }
                (placed, separators, Size::new(width, y - origin.y))
            }
            Axis::Horizontal => {
                let mut x = origin.x;
                let mut y = origin.y;
                let mut line_height = 0.0f32;
                let mut width = 0.0f32;
                for (i, child) in self.children.iter().enumerate() {
                    let size = child.measure(child_constraints);
                    if i > 0 {
                        let next_right = x + spacing + size.width;
                        if max_width.is_finite() && next_right - origin.x > max_width {
                            x = origin.x;
                            y += line_height + self.gap;
                            line_height = 0.0;
                        } else {
                            if self.separator.is_some() {
                                separators.push(Point::new(x + self.gap / 2.0, y));
                            }
                            x += spacing;
                        }
                    }
                    placed.push(Rect::new(x, y, size.width, size.height));
                    x += size.width;
                    width = width.max(x - origin.x);
                    line_height = line_height.max(size.height);
                }
                (placed, separators, Size::new(width, y + line_height - origin.y))
            }
        }
    }
}

impl Widget for Group {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let (_, _, size) = self.arrange(Point::ORIGIN, constraints.max_width);
        constraints.constrain(size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let (placed, separators, size) = self.arrange(bounds.origin(), bounds.width);
        for (child, rect) in self.children.iter_mut().zip(placed) {
            child.layout(rect);
        }
        self.separator_positions = separators;
        LayoutResult { size }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(separator) = &self.separator {
            let style = self.separator_style();
            for position in &self.separator_positions {
                canvas.draw_text(separator, *position, &style);
            }
        }
        for child in &self.children {
            child.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let mut message = None;
        for child in &mut self.children {
            if let Some(msg) = child.event(event) {
                message.get_or_insert(msg);
            }
        }
        message
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    fn accessible_role(&self) -> AccessibleRole {
        self.role
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for Group {
    fn brick_name(&self) -> &'static str {
        "Group"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[BrickAssertion::MaxLatencyMs(16)]
    }

    fn to_html(&self) -> String {
        let class = self
            .class
            .as_deref()
            .map(|c| format!(r#" class="{}""#, html::escape(c)))
            .unwrap_or_default();
        let inner: String = self.children.iter().map(|c| c.to_html()).collect();
        format!("<{tag}{class}>{inner}</{tag}>", tag = self.tag)
    }

    fn to_css(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Text;
    use folio_core::RecordingCanvas;

    fn word(s: &str) -> Text {
        Text::new(s).font_size(10.0).line_height(1.0)
    }

    #[test]
    fn test_vertical_stacks_with_gap() {
        let mut g = Group::new("div").gap(4.0).child(word("ab")).child(word("cd"));
        let result = g.layout(Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(result.size.height, 24.0);
        assert_eq!(g.children()[1].bounds().y, 14.0);
    }

    #[test]
    fn test_horizontal_places_side_by_side() {
        let mut g = Group::row("span").gap(5.0).child(word("ab")).child(word("cd"));
        g.layout(Rect::new(10.0, 0.0, 200.0, 100.0));
        // "ab" is 12px wide
        assert_eq!(g.children()[0].bounds().x, 10.0);
        assert_eq!(g.children()[1].bounds().x, 27.0);
    }

    #[test]
    fn test_horizontal_wraps() {
        let mut g = Group::row("span").child(word("abcdef")).child(word("abcdef"));
        let result = g.layout(Rect::new(0.0, 0.0, 50.0, 100.0));
        assert_eq!(g.children()[1].bounds().x, 0.0);
        assert_eq!(g.children()[1].bounds().y, 10.0);
        assert_eq!(result.size.height, 20.0);
    }

    #[test]
    fn test_separator_painted_between_children() {
        let mut g = Group::row("span")
            .separator("|", Color::BLACK)
            .child(word("a"))
            .child(word("b"))
            .child(word("c"));
        g.layout(Rect::new(0.0, 0.0, 500.0, 50.0));
        let mut canvas = RecordingCanvas::new();
        g.paint(&mut canvas);
        assert_eq!(canvas.texts(), vec!["|", "|", "a", "b", "c"]);
    }

    #[test]
    fn test_html_nests_children() {
        let g = Group::new("ul")
            .class("folio-links")
            .child(Group::new("li").child(Text::new("x")));
        assert_eq!(
            g.to_html(),
            r#"<ul class="folio-links"><li><span>x</span></li></ul>"#
        );
    }

    #[test]
    fn test_empty_group() {
        let g = Group::new("div").class("folio-grid");
        assert!(g.is_empty());
        assert_eq!(g.to_html(), r#"<div class="folio-grid"></div>"#);
        assert_eq!(g.measure(Constraints::width_bound(100.0)), Size::ZERO);
    }

    #[test]
    fn test_event_returns_first_message() {
        let mut g = Group::new("div").child(word("a"));
        assert!(g.event(&Event::MouseLeave).is_none());
    }
}
