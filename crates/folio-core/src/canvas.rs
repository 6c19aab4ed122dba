//! Draw commands and a canvas that records them.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::widget::{Canvas, TextStyle, Transform2D};
use serde::{Deserialize, Serialize};

/// A single painted primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Filled or stroked rectangle
    Rect {
        /// Rectangle bounds (before transform)
        bounds: Rect,
        /// Fill color, if filled
        fill: Option<Color>,
        /// Stroke color and width, if stroked
        stroke: Option<(Color, f32)>,
        /// Transform active when the rectangle was drawn
        transform: Transform2D,
    },
    /// Text run
    Text {
        /// Text content
        content: String,
        /// Top-left position
        position: Point,
        /// Text style
        style: TextStyle,
    },
    /// Image scaled into a rectangle
    Image {
        /// Image source
        source: String,
        /// Destination bounds
        bounds: Rect,
        /// Grayscale amount (0.0 = full color)
        grayscale: f32,
    },
    /// Polyline
    Path {
        /// Points of the line
        points: Vec<Point>,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
}

/// Canvas that records draw commands instead of rasterising.
///
/// Used by tests to check what was painted and by the CLI to dump a
/// frame as JSON.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
    transform_stack: Vec<Transform2D>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Contents of every recorded text command, in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every recorded image command, in paint order.
    #[must_use]
    pub fn images(&self) -> Vec<(&str, Rect, f32)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Image {
                    source,
                    bounds,
                    grayscale,
                } => Some((source.as_str(), *bounds, *grayscale)),
                _ => None,
            })
            .collect()
    }

    /// The combined transform currently in effect.
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or(Transform2D::IDENTITY)
    }

    /// The innermost clip, if any.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            fill: Some(color),
            stroke: None,
            transform: self.current_transform(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            fill: None,
            stroke: Some((color, width)),
            transform: self.current_transform(),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, source: &str, rect: Rect, grayscale: f32) {
        self.commands.push(DrawCommand::Image {
            source: source.to_string(),
            bounds: rect,
            grayscale,
        });
    }

    fn draw_path(&mut self, points: &[Point], color: Color, width: f32) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let combined = transform.then(&self.current_transform());
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }
}
