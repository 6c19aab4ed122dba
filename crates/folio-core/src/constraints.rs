//! Layout constraints for widgets.

use crate::geometry::Size;

/// Minimum and maximum sizes a widget may take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Bounded width, unbounded height: the usual constraint for a
    /// vertically scrolling panel.
    #[must_use]
    pub const fn width_bound(max_width: f32) -> Self {
        Self::new(0.0, max_width, 0.0, f32::INFINITY)
    }

    /// Clamp a size into these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }
}
