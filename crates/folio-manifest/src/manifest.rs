//! Showcase manifest types.
//!
//! A showcase file lists the projects of a portfolio page and, optionally,
//! overrides the theme. The same document can be written as YAML, TOML or
//! JSON; the format is picked from the file extension.

use crate::error::ManifestError;
use folio_core::{Breakpoints, Color, Fonts, Palette, Project, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Serialization format of a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl Format {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ManifestError::UnsupportedFormat(ext)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => f.write_str("yaml"),
            Self::Toml => f.write_str("toml"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Parsed showcase file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Showcase {
    /// Theme overrides
    pub theme: Option<ThemeConfig>,
    /// Projects in display order
    pub projects: Vec<Project>,
}

/// Theme section. Every field is optional and falls back to the built-in
/// theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme name
    pub name: Option<String>,
    /// Colors as hex strings
    pub colors: ColorsConfig,
    /// Font stacks
    pub fonts: FontsConfig,
    /// Breakpoint overrides
    pub breakpoints: Option<BreakpointsConfig>,
}

/// Palette overrides as hex strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Body text
    pub grey: Option<String>,
    /// Panel backdrop
    pub white: Option<String>,
    /// Borders and dividers
    pub line: Option<String>,
    /// Image well background
    pub mist: Option<String>,
}

/// Font stack overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    /// Headings and body
    pub main: Option<String>,
    /// Descriptions and captions
    pub second: Option<String>,
}

/// Breakpoint overrides in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointsConfig {
    /// Largest narrow width
    pub sm: Option<u32>,
    /// Smallest medium width
    pub md: Option<u32>,
    /// Largest medium width
    pub md_max: Option<u32>,
    /// Smallest large width
    pub lg: Option<u32>,
    /// Smallest extra-large width
    pub xl: Option<u32>,
}

fn color_field(
    value: Option<&String>,
    field: &str,
    fallback: Color,
) -> Result<Color, ManifestError> {
    value.map_or(Ok(fallback), |hex| {
        Color::from_hex(hex).map_err(|e| {
            ManifestError::invalid(format!("theme.colors.{field}"), format!("'{hex}': {e}"))
        })
    })
}

/// Characters that could end a declaration, a rule or the `<style>` element
/// a font stack is written into.
const FORBIDDEN_FONT_CHARS: &[char] = &[';', '{', '}', '<', '>', '\\', '/', '\n', '\r'];

fn font_field(
    value: Option<&String>,
    field: &str,
    fallback: String,
) -> Result<String, ManifestError> {
    match value {
        None => Ok(fallback),
        Some(stack) => match stack.chars().find(|c| FORBIDDEN_FONT_CHARS.contains(c)) {
            Some(c) => Err(ManifestError::invalid(
                format!("theme.fonts.{field}"),
                format!("'{stack}': character '{c}' is not allowed in a font stack"),
            )),
            None if stack.trim().is_empty() => Err(ManifestError::invalid(
                format!("theme.fonts.{field}"),
                "font stack is empty",
            )),
            None => Ok(stack.clone()),
        },
    }
}

impl BreakpointsConfig {
    /// Apply the overrides on top of `base`, rejecting unordered results.
    pub fn resolve(&self, base: Breakpoints) -> Result<Breakpoints, ManifestError> {
        let px = |v: Option<u32>, fallback: f32| v.map_or(fallback, |v| v as f32);
        let resolved = Breakpoints {
            sm: px(self.sm, base.sm),
            md: px(self.md, base.md),
            md_max: px(self.md_max, base.md_max),
            lg: px(self.lg, base.lg),
            xl: px(self.xl, base.xl),
        };
        if resolved.is_ordered() {
            Ok(resolved)
        } else {
            Err(ManifestError::invalid(
                "theme.breakpoints",
                format!(
                    "must satisfy 0 < sm < md <= md_max < lg <= xl (got sm={}, md={}, md_max={}, lg={}, xl={})",
                    resolved.sm, resolved.md, resolved.md_max, resolved.lg, resolved.xl
                ),
            ))
        }
    }
}

impl ThemeConfig {
    /// Build a [`Theme`] from the defaults plus these overrides.
    pub fn resolve(&self) -> Result<Theme, ManifestError> {
        let base = Theme::default();
        let colors = Palette {
            grey: color_field(self.colors.grey.as_ref(), "grey", base.colors.grey)?,
            white: color_field(self.colors.white.as_ref(), "white", base.colors.white)?,
            line: color_field(self.colors.line.as_ref(), "line", base.colors.line)?,
            mist: color_field(self.colors.mist.as_ref(), "mist", base.colors.mist)?,
        };
        let fonts = Fonts {
            main: font_field(self.fonts.main.as_ref(), "main", base.fonts.main)?,
            second: font_field(self.fonts.second.as_ref(), "second", base.fonts.second)?,
        };
        let breakpoints = match &self.breakpoints {
            Some(config) => config.resolve(base.breakpoints)?,
            None => base.breakpoints,
        };

        Ok(Theme::default()
            .with_name(self.name.clone().unwrap_or(base.name))
            .with_colors(colors)
            .with_fonts(fonts)
            .with_breakpoints(breakpoints))
    }
}

impl Showcase {
    /// Parse a manifest from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ManifestError> {
        Self::parse(text, Format::Yaml)
    }

    /// Parse a manifest from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ManifestError> {
        Self::parse(text, Format::Toml)
    }

    /// Parse a manifest from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ManifestError> {
        Self::parse(text, Format::Json)
    }

    /// Parse and validate a manifest in the given format.
    pub fn parse(text: &str, format: Format) -> Result<Self, ManifestError> {
        let showcase: Self = match format {
            Format::Yaml => serde_yaml_ng::from_str(text)?,
            Format::Toml => toml::from_str(text)?,
            Format::Json => serde_json::from_str(text)?,
        };
        showcase.validate()?;
        Ok(showcase)
    }

    /// Load a manifest file, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let text = std::fs::read_to_string(path)?;
        let showcase = Self::parse(&text, format)?;
        tracing::debug!(
            path = %path.display(),
            %format,
            projects = showcase.projects.len(),
            "loaded manifest"
        );
        Ok(showcase)
    }

    /// Check everything that parsing alone does not.
    pub fn validate(&self) -> Result<(), ManifestError> {
        self.theme().map(|_| ())
    }

    /// The effective theme: defaults plus the manifest's overrides.
    pub fn theme(&self) -> Result<Theme, ManifestError> {
        self.theme
            .as_ref()
            .map_or_else(|| Ok(Theme::default()), ThemeConfig::resolve)
    }

    /// Project with exactly this name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }
}
