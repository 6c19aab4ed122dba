//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: compute intrinsic size given constraints
//! 2. **Layout**: position self and children within allocated bounds
//! 3. **Paint**: emit draw commands onto a [`Canvas`]
//!
//! Every widget is also a [`Brick`], so the same tree can be rendered as
//! markup through [`Brick::to_html`] and [`Brick::to_css`].
//!
//! # Examples
//!
//! ```
//! use folio_core::{TypeId, Transform2D};
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<u32>());
//!
//! let skew = Transform2D::skew_x_degrees(-3.0);
//! assert!(skew.matrix[2] < 0.0);
//! ```

use crate::brick::Brick;
use crate::color::Color;
use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Brick + Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position children within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event, optionally producing a message for the host.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Get child widgets for tree traversal.
    fn children(&self) -> &[Box<dyn Widget>];

    /// Get mutable child widgets.
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>];

    /// Check if this widget currently reacts to pointer input.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a stroked rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw text with its top-left at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Draw an image from `source` scaled into `rect`.
    ///
    /// `grayscale` follows CSS `grayscale()`: 0.0 is full color.
    fn draw_image(&mut self, source: &str, rect: Rect, grayscale: f32);

    /// Draw a polyline.
    fn draw_path(&mut self, points: &[Point], color: Color, width: f32);

    /// Push a clip region.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the clip region.
    fn pop_clip(&mut self);

    /// Push a transform.
    fn push_transform(&mut self, transform: Transform2D);

    /// Pop the transform.
    fn pop_transform(&mut self);
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
    /// Font family stack
    pub family: Option<String>,
    /// Draw an underline (links)
    pub underline: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
            family: None,
            underline: false,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal (400)
    #[default]
    Normal,
    /// Medium (500)
    Medium,
    /// Bold (700)
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight.
    #[must_use]
    pub const fn css_value(self) -> u16 {
        match self {
            Self::Normal => 400,
            Self::Medium => 500,
            Self::Bold => 700,
        }
    }
}

/// 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f] for:
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Transform2D {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Horizontal skew by an angle in degrees (CSS `skew(θ, 0)`).
    #[must_use]
    pub fn skew_x_degrees(degrees: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, degrees.to_radians().tan(), 1.0, 0.0, 0.0],
        }
    }

    /// Compose: apply `self` first, then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let [a1, b1, c1, d1, e1, f1] = self.matrix;
        let [a2, b2, c2, d2, e2, f2] = other.matrix;
        Self {
            matrix: [
                a2 * a1 + c2 * b1,
                b2 * a1 + d2 * b1,
                a2 * c1 + c2 * d1,
                b2 * c1 + d2 * d1,
                a2 * e1 + c2 * f1 + e2,
                b2 * e1 + d2 * f1 + f2,
            ],
        }
    }

    /// Map a point through the transform.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let [a, b, c, d, e, f] = self.matrix;
        Point::new(a * point.x + c * point.y + e, b * point.x + d * point.y + f)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Heading
    Heading,
    /// Link
    Link,
    /// Image
    Image,
    /// List
    List,
    /// List item
    ListItem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id() {
        assert_eq!(TypeId::of::<u32>(), TypeId::of::<u32>());
        assert_ne!(TypeId::of::<u32>(), TypeId::of::<String>());
    }

    #[test]
    fn test_transform_identity_apply() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(Transform2D::IDENTITY.apply(p), p);
        assert_eq!(Transform2D::default(), Transform2D::IDENTITY);
    }

    #[test]
    fn test_transform_translate_then_skew() {
        let t = Transform2D::translate(24.0, 0.0).then(&Transform2D::skew_x_degrees(-3.0));
        let top = t.apply(Point::new(0.0, 0.0));
        let lower = t.apply(Point::new(0.0, 100.0));
        assert!((top.x - 24.0).abs() < 1e-4);
        // Negative skew leans the bottom edge to the left.
        assert!(lower.x < top.x);
    }

    #[test]
    fn test_font_weight_css() {
        assert_eq!(FontWeight::default().css_value(), 400);
        assert_eq!(FontWeight::Medium.css_value(), 500);
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 16.0);
        assert!(!style.underline);
        assert!(style.family.is_none());
    }
}
