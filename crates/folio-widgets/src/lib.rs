//! Widgets for the folio showcase renderer.
//!
//! The leaf widgets ([`Text`], [`Group`], [`PlatformIcon`], [`Link`],
//! [`Thumbnail`], [`ImageGrid`]) compose into [`ProjectDetail`], the panel
//! that presents one project.

pub mod group;
pub mod icon;
pub mod image_grid;
pub mod link;
pub mod project_detail;
pub mod styles;
pub mod text;
pub mod thumbnail;

pub use group::{Axis, Group};
pub use icon::PlatformIcon;
pub use image_grid::ImageGrid;
pub use link::{Link, LinkActivated, LinkTarget};
pub use project_detail::{descendants, DetailProps, ProjectDetail};
pub use text::{Text, TextTag};
pub use thumbnail::{ellipsize, ClickHandler, ImageClicked, Thumbnail};
