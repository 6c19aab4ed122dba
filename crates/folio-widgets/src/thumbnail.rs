//! One image grid cell: a caption above a clickable screenshot.

use crate::styles;
use folio_core::{
    html, AccessibleRole, Brick, BrickAssertion, Breakpoints, Canvas, Constraints, Event, Fonts,
    FontWeight, LayoutResult, MouseButton, Palette, Point, ProjectImage, Rect, Size, TextStyle,
    TypeId, Widget,
};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Fixed cell height above the narrow breakpoint.
pub const CELL_HEIGHT: f32 = 120.0;
/// Grayscale applied to images that are not hovered.
pub const RESTING_GRAYSCALE: f32 = 0.9;

const CAPTION_SIZE: f32 = 14.0;
const CAPTION_HEIGHT: f32 = CAPTION_SIZE * 1.6;
const ELLIPSIS: char = '\u{2026}';

/// Message emitted when an image is clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageClicked {
    /// Position of the image in the project's list
    pub index: usize,
    /// Image source
    pub url: String,
    /// Caption and alt text
    pub description: String,
    /// Pointer position at release
    pub position: Point,
}

/// Callback invoked synchronously for every image click.
pub type ClickHandler = Arc<dyn Fn(&ImageClicked) + Send + Sync>;

/// Shorten `text` to fit `width` pixels of `font_size` text, ending with an
/// ellipsis when anything was cut.
#[must_use]
pub fn ellipsize(text: &str, width: f32, font_size: f32) -> String {
    let max_chars = (width / (font_size * 0.6)).floor().max(0.0) as usize;
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    text.chars()
        .take(max_chars - 1)
        .chain(std::iter::once(ELLIPSIS))
        .collect()
}

/// Grid cell for one [`ProjectImage`].
pub struct Thumbnail {
    index: usize,
    image: ProjectImage,
    breakpoints: Breakpoints,
    viewport_width: f32,
    colors: Palette,
    fonts: Fonts,
    hovered: bool,
    pressed: bool,
    on_click: Option<ClickHandler>,
    bounds: Rect,
    image_bounds: Rect,
    caption_bounds: Rect,
}

impl fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thumbnail")
            .field("index", &self.index)
            .field("image", &self.image)
            .field("viewport_width", &self.viewport_width)
            .field("hovered", &self.hovered)
            .field("has_handler", &self.on_click.is_some())
            .finish_non_exhaustive()
    }
}

impl Thumbnail {
    /// Cell for the image at `index`.
    #[must_use]
    pub fn new(index: usize, image: ProjectImage) -> Self {
        Self {
            index,
            image,
            breakpoints: Breakpoints::default(),
            viewport_width: 1280.0,
            colors: Palette::default(),
            fonts: Fonts::default(),
            hovered: false,
            pressed: false,
            on_click: None,
            bounds: Rect::default(),
            image_bounds: Rect::default(),
            caption_bounds: Rect::default(),
        }
    }

    /// Set breakpoints.
    #[must_use]
    pub const fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Set the viewport width the cell is shown at.
    #[must_use]
    pub const fn viewport_width(mut self, width: f32) -> Self {
        self.viewport_width = width;
        self
    }

    /// Set colors.
    #[must_use]
    pub fn colors(mut self, colors: Palette) -> Self {
        self.colors = colors;
        self
    }

    /// Set font stacks.
    #[must_use]
    pub fn fonts(mut self, fonts: Fonts) -> Self {
        self.fonts = fonts;
        self
    }

    /// Set the click handler.
    #[must_use]
    pub fn on_click(mut self, handler: Option<ClickHandler>) -> Self {
        self.on_click = handler;
        self
    }

    /// Position in the project's image list.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The image shown.
    #[must_use]
    pub const fn image(&self) -> &ProjectImage {
        &self.image
    }

    /// Whether the pointer is over the image.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    fn is_narrow(&self) -> bool {
        self.breakpoints.is_narrow(self.viewport_width)
    }

    /// Grayscale the image is painted with.
    #[must_use]
    pub fn grayscale(&self) -> f32 {
        if self.hovered || self.is_narrow() {
            0.0
        } else {
            RESTING_GRAYSCALE
        }
    }

    fn caption_style(&self) -> TextStyle {
        TextStyle {
            size: CAPTION_SIZE,
            color: self.colors.grey,
            weight: FontWeight::Medium,
            family: Some(self.fonts.second.clone()),
            underline: false,
        }
    }

    fn reset_pointer(&mut self) {
        self.hovered = false;
        self.pressed = false;
    }
}

impl Widget for Thumbnail {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = if constraints.max_width.is_finite() {
            constraints.max_width
        } else {
            CELL_HEIGHT * 16.0 / 9.0
        };
        let height = if self.is_narrow() {
            // Auto height: 16:9 screenshot under the caption.
            CAPTION_HEIGHT + width * 9.0 / 16.0
        } else {
            CELL_HEIGHT
        };
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        if self.is_narrow() {
            self.caption_bounds = Rect::new(bounds.x, bounds.y, bounds.width, CAPTION_HEIGHT);
            self.image_bounds = Rect::new(
                bounds.x,
                bounds.y + CAPTION_HEIGHT,
                bounds.width,
                (bounds.height - CAPTION_HEIGHT).max(0.0),
            );
        } else {
            self.caption_bounds = Rect::new(bounds.x, bounds.y, 0.0, 0.0);
            self.image_bounds = bounds;
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.is_narrow() {
            let caption = ellipsize(
                &self.image.description,
                self.caption_bounds.width,
                CAPTION_SIZE,
            );
            if !caption.is_empty() {
                canvas.draw_text(&caption, self.caption_bounds.origin(), &self.caption_style());
            }
        }

        canvas.fill_rect(self.image_bounds, self.colors.mist.grayscale(self.grayscale()));
        canvas.stroke_rect(self.image_bounds, self.colors.line, 1.0);
        canvas.draw_image(&self.image.url, self.image_bounds, self.grayscale());
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::Resize { width, .. } => {
                self.viewport_width = *width;
                if self.is_narrow() {
                    self.reset_pointer();
                }
                None
            }
            Event::MouseLeave => {
                self.reset_pointer();
                None
            }
            _ if self.is_narrow() => None,
            Event::MouseMove { position } => {
                self.hovered = self.image_bounds.contains_point(position);
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                self.pressed = self.image_bounds.contains_point(position);
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let was_pressed = self.pressed;
                self.pressed = false;
                if !(was_pressed && self.image_bounds.contains_point(position)) {
                    return None;
                }

                let clicked = ImageClicked {
                    index: self.index,
                    url: self.image.url.clone(),
                    description: self.image.description.clone(),
                    position: *position,
                };
                tracing::debug!(index = self.index, url = %clicked.url, "image clicked");
                if let Some(handler) = &self.on_click {
                    handler(&clicked);
                }
                Some(Box::new(clicked))
            }
            _ => None,
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        !self.is_narrow()
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.image.description)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Image
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for Thumbnail {
    fn brick_name(&self) -> &'static str {
        "Thumbnail"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[BrickAssertion::MaxLatencyMs(16)]
    }

    fn to_html(&self) -> String {
        let description = html::escape(&self.image.description);
        format!(
            r#"<div class="folio-cell"><div class="folio-caption">{description}</div><img class="folio-image" src="{src}" alt="{description}" data-index="{index}" /></div>"#,
            src = html::escape(&self.image.url),
            index = self.index,
        )
    }

    fn to_css(&self) -> String {
        styles::cell_sheet(&self.breakpoints, &self.colors, &self.fonts).to_css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::RecordingCanvas;
    use std::sync::Mutex;

    fn cell(width: f32) -> Thumbnail {
        let mut t = Thumbnail::new(2, ProjectImage::new("a.png", "shot")).viewport_width(width);
        let size = t.measure(Constraints::width_bound(200.0));
        t.layout(Rect::from_size(size));
        t
    }

    fn click(t: &mut Thumbnail, x: f32, y: f32) -> Option<Box<dyn Any + Send>> {
        let position = Point::new(x, y);
        t.event(&Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        t.event(&Event::MouseUp {
            position,
            button: MouseButton::Left,
        })
    }

    #[test]
    fn test_ellipsize() {
        assert_eq!(ellipsize("shot", 100.0, 10.0), "shot");
        // 30px at 6px per char -> 5 chars
        assert_eq!(ellipsize("screenshot", 30.0, 10.0), "scre\u{2026}");
        assert_eq!(ellipsize("screenshot", 3.0, 10.0), "");
        assert_eq!(ellipsize("", 0.0, 10.0), "");
    }

    #[test]
    fn test_wide_cell_is_fixed_height() {
        let t = cell(1280.0);
        assert_eq!(t.bounds().height, CELL_HEIGHT);
        assert_eq!(t.bounds().width, 200.0);
    }

    #[test]
    fn test_narrow_cell_height_follows_width() {
        let t = cell(375.0);
        assert_eq!(t.bounds().height, CAPTION_HEIGHT + 112.5);
    }

    #[test]
    fn test_wide_paint_grayscale_without_caption() {
        let t = cell(1280.0);
        let mut canvas = RecordingCanvas::new();
        t.paint(&mut canvas);
        assert!(canvas.texts().is_empty());
        assert_eq!(canvas.images(), vec![("a.png", t.bounds(), RESTING_GRAYSCALE)]);
    }

    #[test]
    fn test_narrow_paint_color_with_caption() {
        let t = cell(375.0);
        let mut canvas = RecordingCanvas::new();
        t.paint(&mut canvas);
        assert_eq!(canvas.texts(), vec!["shot"]);
        assert_eq!(canvas.images()[0].2, 0.0);
    }

    #[test]
    fn test_hover_removes_grayscale() {
        let mut t = cell(1280.0);
        t.event(&Event::MouseMove {
            position: Point::new(10.0, 10.0),
        });
        assert!(t.is_hovered());
        assert_eq!(t.grayscale(), 0.0);
        t.event(&Event::MouseLeave);
        assert_eq!(t.grayscale(), RESTING_GRAYSCALE);
    }

    #[test]
    fn test_click_invokes_handler_and_returns_message() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handler: ClickHandler = Arc::new(move |c: &ImageClicked| {
            sink.lock().unwrap().push(c.clone());
        });
        let mut t = cell(1280.0).on_click(Some(handler));
        let msg = click(&mut t, 10.0, 10.0).expect("message");
        let clicked = msg.downcast::<ImageClicked>().expect("ImageClicked");
        assert_eq!(clicked.index, 2);
        assert_eq!(clicked.url, "a.png");
        assert_eq!(clicked.description, "shot");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], *clicked);
    }

    #[test]
    fn test_click_without_handler_still_reports() {
        let mut t = cell(1280.0);
        assert!(click(&mut t, 10.0, 10.0).is_some());
    }

    #[test]
    fn test_narrow_is_not_clickable() {
        let mut t = cell(375.0);
        assert!(!t.is_interactive());
        assert!(click(&mut t, 10.0, 40.0).is_none());
    }

    #[test]
    fn test_resize_to_narrow_clears_hover() {
        let mut t = cell(1280.0);
        t.event(&Event::MouseMove {
            position: Point::new(10.0, 10.0),
        });
        t.event(&Event::Resize {
            width: 375.0,
            height: 800.0,
        });
        assert!(!t.is_hovered());
        assert!(!t.is_interactive());
    }

    #[test]
    fn test_html_escapes() {
        let t = Thumbnail::new(0, ProjectImage::new("a.png?x=1&y=2", r#"say "hi""#));
        assert_eq!(
            t.to_html(),
            r#"<div class="folio-cell"><div class="folio-caption">say &quot;hi&quot;</div><img class="folio-image" src="a.png?x=1&amp;y=2" alt="say &quot;hi&quot;" data-index="0" /></div>"#
        );
    }
}
