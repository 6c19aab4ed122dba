//! Core types and traits for the folio showcase renderer.
//!
//! This crate provides the foundations the widgets build on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Insets`]
//! - Colors: [`Color`] with hex parsing and CSS output
//! - The render contracts: [`Widget`] (canvas target) and [`Brick`] (markup target)
//! - A [`RecordingCanvas`] that captures [`DrawCommand`]s
//! - Theming: [`Theme`], [`Breakpoints`], and a CSS [`StyleSheet`] builder
//! - The [`Project`] record the detail panel displays

mod brick;
mod canvas;
mod color;
mod constraints;
mod event;
mod geometry;
pub mod html;
mod media;
mod project;
pub mod style;
mod theme;
pub mod widget;

pub use brick::{
    render_html, Brick, BrickAssertion, BrickBudget, BrickError, BrickVerification,
};
pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, MouseButton};
pub use geometry::{Insets, Point, Rect, Size};
pub use media::{Breakpoints, Media};
pub use project::{capitalize_first, Platform, Project, ProjectImage};
pub use style::{Rule, StyleSheet};
pub use theme::{Fonts, Palette, Theme};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, Transform2D, TypeId, Widget,
};
