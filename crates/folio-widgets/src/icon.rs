//! Platform glyphs (desktop and mobile).

use folio_core::{
    AccessibleRole, Brick, BrickAssertion, Canvas, Color, Constraints, Event, LayoutResult,
    Platform, Point, Rect, Size, TypeId, Widget,
};
use std::any::Any;

const ICON_SIZE: f32 = 16.0;
const MARGIN_X: f32 = 5.0;
const STROKE: f32 = 1.5;

/// Icon for a recognised platform.
#[derive(Debug, Clone)]
pub struct PlatformIcon {
    platform: Platform,
    color: Color,
    /// Glyph edge length in pixels
    size: f32,
    bounds: Rect,
}

impl PlatformIcon {
    /// Create an icon for `platform`.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            color: Color::BLACK,
            size: ICON_SIZE,
            bounds: Rect::default(),
        }
    }

    /// Set stroke color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set glyph size.
    #[must_use]
    pub const fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// The platform shown.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Glyph square, inside the horizontal margins.
    fn glyph(&self) -> Rect {
        Rect::new(
            self.bounds.x + MARGIN_X,
            self.bounds.y,
            self.size,
            self.size,
        )
    }

    fn svg_body(&self) -> &'static str {
        match self.platform {
            Platform::Pc => {
                r#"<rect x="1" y="2" width="14" height="9" rx="1" /><path d="M5 14h6M8 11v3" />"#
            }
            Platform::Mobile => {
                r#"<rect x="4" y="1" width="8" height="14" rx="1.5" /><path d="M7 12.5h2" />"#
            }
        }
    }
}

impl Widget for PlatformIcon {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.size + MARGIN_X * 2.0, self.size))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let g = self.glyph();
        let unit = g.width / 16.0;
        let at = |x: f32, y: f32| Point::new(g.x + x * unit, g.y + y * unit);

        match self.platform {
            Platform::Pc => {
                canvas.stroke_rect(
                    Rect::new(g.x + unit, g.y + 2.0 * unit, 14.0 * unit, 9.0 * unit),
                    self.color,
                    STROKE,
                );
                canvas.draw_path(&[at(8.0, 11.0), at(8.0, 14.0)], self.color, STROKE);
                canvas.draw_path(&[at(5.0, 14.0), at(11.0, 14.0)], self.color, STROKE);
            }
            Platform::Mobile => {
                canvas.stroke_rect(
                    Rect::new(g.x + 4.0 * unit, g.y + unit, 8.0 * unit, 14.0 * unit),
                    self.color,
                    STROKE,
                );
                canvas.draw_path(&[at(7.0, 12.5), at(9.0, 12.5)], self.color, STROKE);
            }
        }
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
        Some(match self.platform {
            Platform::Pc => "PC",
            Platform::Mobile => "Mobile",
        })
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Image
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for PlatformIcon {
    fn brick_name(&self) -> &'static str {
        "PlatformIcon"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[BrickAssertion::MaxLatencyMs(16)]
    }

    fn to_html(&self) -> String {
        format!(
            r#"<svg class="folio-icon folio-icon-{slug}" role="img" aria-label="{label}" viewBox="0 0 16 16" width="{size}" height="{size}" fill="none" stroke="currentColor" stroke-width="{STROKE}">{body}</svg>"#,
            slug = self.platform.slug(),
            label = self.platform,
            size = self.size,
            body = self.svg_body(),
        )
    }

    fn to_css(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_measure_includes_margins() {
        let icon = PlatformIcon::new(Platform::Pc);
        assert_eq!(
            icon.measure(Constraints::width_bound(100.0)),
            Size::new(26.0, 16.0)
        );
    }

    #[test]
    fn test_html_classes_and_label() {
        let html = PlatformIcon::new(Platform::Mobile).to_html();
        assert!(html.starts_with(r#"<svg class="folio-icon folio-icon-mobile""#));
        assert!(html.contains(r#"aria-label="Mobile""#));
        assert!(html.ends_with("</svg>"));
    }

    #[test]
    fn test_pc_paints_screen_and_stand() {
        let mut icon = PlatformIcon::new(Platform::Pc).color(Color::WHITE);
        icon.layout(Rect::new(0.0, 0.0, 26.0, 16.0));
        let mut canvas = RecordingCanvas::new();
        icon.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 3);
        match &canvas.commands()[0] {
            DrawCommand::Rect { bounds, stroke, .. } => {
                assert_eq!(bounds.x, 6.0);
                assert_eq!(*stroke, Some((Color::WHITE, STROKE)));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_mobile_paints_two_commands() {
        let mut icon = PlatformIcon::new(Platform::Mobile);
        icon.layout(Rect::new(0.0, 0.0, 26.0, 16.0));
        let mut canvas = RecordingCanvas::new();
        icon.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 2);
    }

    #[test]
    fn test_accessibility() {
        let icon = PlatformIcon::new(Platform::Pc);
        assert_eq!(icon.accessible_name(), Some("PC"));
        assert_eq!(icon.accessible_role(), AccessibleRole::Image);
    }
}
