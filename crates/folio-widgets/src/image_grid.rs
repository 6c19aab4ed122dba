//! Responsive grid of project screenshots.

use crate::styles;
use crate::thumbnail::{ClickHandler, Thumbnail};
use folio_core::{
    AccessibleRole, Brick, BrickAssertion, Breakpoints, Canvas, Constraints, Event, Fonts,
    LayoutResult, Palette, Point, ProjectImage, Rect, Size, Theme, TypeId, Widget,
};
use std::any::Any;

const GAP: f32 = 10.0;
const NARROW_GAP: f32 = 30.0;
const NARROW_PADDING_TOP: f32 = 20.0;

/// Grid of [`Thumbnail`] cells, one per image.
pub struct ImageGrid {
    breakpoints: Breakpoints,
    colors: Palette,
    fonts: Fonts,
    viewport_width: f32,
    cells: Vec<Box<dyn Widget>>,
    bounds: Rect,
}

impl ImageGrid {
    /// Build a cell per image, all sharing `on_click`.
    #[must_use]
    pub fn new(
        images: &[ProjectImage],
        theme: &Theme,
        viewport_width: f32,
        on_click: Option<&ClickHandler>,
    ) -> Self {
        let cells = images
            .iter()
            .enumerate()
            .map(|(index, image)| {
                Box::new(
                    Thumbnail::new(index, image.clone())
                        .breakpoints(theme.breakpoints)
                        .viewport_width(viewport_width)
                        .colors(theme.colors.clone())
                        .fonts(theme.fonts.clone())
                        .on_click(on_click.cloned()),
                ) as Box<dyn Widget>
            })
            .collect();

        Self {
            breakpoints: theme.breakpoints,
            colors: theme.colors.clone(),
            fonts: theme.fonts.clone(),
            viewport_width,
            cells,
            bounds: Rect::default(),
        }
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Columns at the current viewport width.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.breakpoints.grid_columns(self.viewport_width)
    }

    fn is_narrow(&self) -> bool {
        self.breakpoints.is_narrow(self.viewport_width)
    }

    fn gap(&self) -> f32 {
        if self.is_narrow() {
            NARROW_GAP
        } else {
            GAP
        }
    }

    fn padding_top(&self) -> f32 {
        if self.is_narrow() {
            NARROW_PADDING_TOP
        } else {
            0.0
        }
    }

    /// Cell rectangles row by row, plus the total occupied size.
    fn cell_rects(&self, origin: Point, width: f32) -> (Vec<Rect>, Size) {
        let columns = self.columns();
        let gap = self.gap();
        let column_width = ((width - gap * (columns - 1) as f32) / columns as f32).max(0.0);
        let constraints = Constraints::width_bound(column_width);

        let mut rects = Vec::with_capacity(self.cells.len());
        let mut y = origin.y + self.padding_top();
        for (row, chunk) in self.cells.chunks(columns).enumerate() {
            if row > 0 {
                y += gap;
            }
            let mut row_height = 0.0f32;
            for (col, cell) in chunk.iter().enumerate() {
                let size = cell.measure(constraints);
                let x = origin.x + col as f32 * (column_width + gap);
                rects.push(Rect::new(x, y, column_width, size.height));
                row_height = row_height.max(size.height);
            }
            y += row_height;
        }
        (rects, Size::new(width, y - origin.y))
    }
}

impl Widget for ImageGrid {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = if constraints.max_width.is_finite() {
            constraints.max_width
        } else {
            0.0
        };
        let (_, size) = self.cell_rects(Point::ORIGIN, width);
        constraints.constrain(size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let (rects, size) = self.cell_rects(bounds.origin(), bounds.width);
        for (cell, rect) in self.cells.iter_mut().zip(rects) {
            cell.layout(rect);
        }
        LayoutResult { size }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.is_narrow() {
            canvas.draw_path(
                &[
                    self.bounds.origin(),
                    Point::new(self.bounds.right(), self.bounds.y),
                ],
                self.colors.line,
                1.0,
            );
        }
        for cell in &self.cells {
            cell.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Event::Resize { width, .. } = event {
            self.viewport_width = *width;
        }
        let mut message = None;
        for cell in &mut self.cells {
            if let Some(msg) = cell.event(event) {
                message.get_or_insert(msg);
            }
        }
        message
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.cells
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.cells
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::List
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for ImageGrid {
    fn brick_name(&self) -> &'static str {
        "ImageGrid"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[BrickAssertion::MaxLatencyMs(16)]
    }

    fn to_html(&self) -> String {
        let cells: String = self.cells.iter().map(|c| c.to_html()).collect();
        format!(r#"<div class="folio-grid">{cells}</div>"#)
    }

    fn to_css(&self) -> String {
        let mut css = styles::grid_sheet(&self.breakpoints, &self.colors).to_css();
        css.push_str(&styles::cell_sheet(&self.breakpoints, &self.colors, &self.fonts).to_css());
        css
    }
}
