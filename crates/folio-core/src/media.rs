//! Viewport breakpoints and media queries.
//!
//! The panel switches layout at a handful of named thresholds. Each
//! [`Media`] variant is one of them; [`Breakpoints`] turns a variant into a
//! CSS `@media` query for the markup target and into a width predicate for
//! the canvas target, so both targets agree on where the switches happen.

use serde::{Deserialize, Serialize};

/// Viewport-width thresholds in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Largest width still considered narrow (phones)
    pub sm: f32,
    /// Smallest medium width
    pub md: f32,
    /// Largest medium width
    pub md_max: f32,
    /// Smallest large width
    pub lg: f32,
    /// Smallest extra-large width
    pub xl: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            sm: 767.0,
            md: 768.0,
            md_max: 991.0,
            lg: 992.0,
            xl: 1200.0,
        }
    }
}

/// Named media condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Media {
    /// `min-width: md`
    MdMin,
    /// `min-width: lg`
    LgMin,
    /// `min-width: xl`
    XlMin,
    /// `max-width: sm`
    SmMax,
    /// `max-width: md_max`
    MdMax,
    /// `max-width: xl - 1`
    XlMax,
}

impl Breakpoints {
    /// `0 < sm < md <= md_max < lg <= xl`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.sm > 0.0
            && self.sm < self.md
            && self.md <= self.md_max
            && self.md_max < self.lg
            && self.lg <= self.xl
    }

    fn threshold(&self, media: Media) -> f32 {
        match media {
            Media::MdMin => self.md,
            Media::LgMin => self.lg,
            Media::XlMin => self.xl,
            Media::SmMax => self.sm,
            Media::MdMax => self.md_max,
            Media::XlMax => self.xl - 1.0,
        }
    }

    /// CSS query text, e.g. `@media (min-width: 768px)`.
    #[must_use]
    pub fn query(&self, media: Media) -> String {
        let bound = match media {
            Media::MdMin | Media::LgMin | Media::XlMin => "min-width",
            Media::SmMax | Media::MdMax | Media::XlMax => "max-width",
        };
        format!("@media ({bound}: {}px)", self.threshold(media))
    }

    /// Whether a viewport of `width` satisfies the condition.
    #[must_use]
    pub fn matches(&self, media: Media, width: f32) -> bool {
        let t = self.threshold(media);
        match media {
            Media::MdMin | Media::LgMin | Media::XlMin => width >= t,
            Media::SmMax | Media::MdMax | Media::XlMax => width <= t,
        }
    }

    /// Phone-sized viewport.
    #[must_use]
    pub fn is_narrow(&self, width: f32) -> bool {
        self.matches(Media::SmMax, width)
    }

    /// Image grid column count for a viewport width.
    #[must_use]
    pub fn grid_columns(&self, width: f32) -> usize {
        if self.is_narrow(width) {
            1
        } else if self.matches(Media::XlMin, width) {
            3
        } else {
            2
        }
    }
}
