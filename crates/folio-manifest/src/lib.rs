//! Showcase manifest loader for the folio renderer.
//!
//! A manifest lists the projects to present and optional theme overrides.
//! It may be written as YAML, TOML or JSON:
//!
//! ```
//! use folio_manifest::Showcase;
//!
//! let showcase = Showcase::from_yaml_str(
//!     "projects:\n  - name: Demo\n    environments: [pc]\n",
//! )?;
//! assert_eq!(showcase.projects[0].name, "Demo");
//! assert_eq!(showcase.theme()?.breakpoints.md, 768.0);
//! # Ok::<(), folio_manifest::ManifestError>(())
//! ```

mod error;
mod manifest;

pub use error::ManifestError;
pub use manifest::{
    BreakpointsConfig, ColorsConfig, FontsConfig, Format, Showcase, ThemeConfig,
};
