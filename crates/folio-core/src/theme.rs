//! Theme values passed down the widget tree.

use crate::color::Color;
use crate::media::Breakpoints;
use serde::{Deserialize, Serialize};

/// Colors the panel draws with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Body text
    pub grey: Color,
    /// Panel backdrop
    pub white: Color,
    /// Borders and dividers
    pub line: Color,
    /// Image well background
    pub mist: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grey: Color::rgb(0.29, 0.29, 0.29),
            white: Color::WHITE,
            line: Color::rgb(0.9, 0.9, 0.9),
            mist: Color::rgb(0.96, 0.965, 0.97),
        }
    }
}

/// Font family stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fonts {
    /// Headings and body
    pub main: String,
    /// Descriptions and captions
    pub second: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            main: "'Helvetica Neue', Helvetica, Arial, sans-serif".to_string(),
            second: "Georgia, 'Times New Roman', serif".to_string(),
        }
    }
}

/// Complete theme: colors, fonts and breakpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Color palette
    pub colors: Palette,
    /// Font stacks
    pub fonts: Fonts,
    /// Layout breakpoints
    pub breakpoints: Breakpoints,
}

impl Theme {
    /// Create a theme with a custom name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the palette.
    #[must_use]
    pub fn with_colors(mut self, colors: Palette) -> Self {
        self.colors = colors;
        self
    }

    /// Replace the font stacks.
    #[must_use]
    pub fn with_fonts(mut self, fonts: Fonts) -> Self {
        self.fonts = fonts;
        self
    }

    /// Replace the breakpoints.
    #[must_use]
    pub const fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }
}
