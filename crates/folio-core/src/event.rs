//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Pointer and viewport events delivered to the widget tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of press
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Pointer left the rendering surface
    MouseLeave,
    /// Viewport resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
}

impl Event {
    /// Pointer position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. } => Some(*position),
            Self::MouseLeave | Self::Resize { .. } => None,
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
    /// Wheel button
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_position() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(Event::MouseMove { position: p }.position(), Some(p));
        assert_eq!(
            Event::MouseUp {
                position: p,
                button: MouseButton::Left
            }
            .position(),
            Some(p)
        );
        assert_eq!(Event::MouseLeave.position(), None);
        assert_eq!(
            Event::Resize {
                width: 1.0,
                height: 1.0
            }
            .position(),
            None
        );
    }
}
