//! Project detail panel.
//!
//! [`ProjectDetail`] shows one [`Project`]: title, description, platform
//! icons, category and source tags, external links and a screenshot grid.
//! It is a pure function of its [`DetailProps`] and theme: the tree is
//! rebuilt only when the props change by identity, and an absent project
//! renders the empty container.
//!
//! # Examples
//!
//! ```
//! use folio_core::{Brick, Project};
//! use folio_widgets::ProjectDetail;
//!
//! let panel = ProjectDetail::new().with_project(Project::new("Demo").kind("game"));
//! let html = panel.to_html();
//! assert!(html.contains(r#"<h1 class="folio-title">Demo</h1>"#));
//! assert!(html.contains(r#"<span class="folio-type"> game </span>"#));
//! ```

use crate::group::Group;
use crate::icon::PlatformIcon;
use crate::image_grid::ImageGrid;
use crate::link::Link;
use crate::styles;
use crate::text::{Text, TextTag};
use crate::thumbnail::ClickHandler;
use folio_core::{
    capitalize_first, AccessibleRole, Brick, BrickAssertion, BrickBudget, BrickVerification,
    Canvas, Constraints, Event, FontWeight, Insets, LayoutResult, Media, Project, Rect, Size,
    Theme, Transform2D, TypeId, Widget,
};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Share of the viewport the panel takes from the medium breakpoint up.
pub const PANEL_WIDTH_RATIO: f32 = 0.35;
/// Backdrop skew while the panel is not hovered, in degrees.
pub const BACKDROP_SKEW_DEG: f32 = -3.0;
/// Horizontal backdrop offset while the panel is not hovered.
pub const BACKDROP_SHIFT: f32 = 24.0;
/// How far the backdrop extends left of the panel.
const BACKDROP_BLEED: f32 = 30.0;

const TITLE_SIZE: f32 = 24.0;
const BODY_SIZE: f32 = 14.0;

/// Inputs of the panel.
#[derive(Clone, Default)]
pub struct DetailProps {
    /// Project to show; `None` renders the empty container
    pub project: Option<Arc<Project>>,
    /// Called for every image click
    pub on_image_click: Option<ClickHandler>,
}

impl fmt::Debug for DetailProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetailProps")
            .field("project", &self.project.as_ref().map(|p| p.name.as_str()))
            .field("on_image_click", &self.on_image_click.is_some())
            .finish()
    }
}

impl DetailProps {
    /// Props with a project and an optional handler.
    #[must_use]
    pub fn new(project: Option<Arc<Project>>, on_image_click: Option<ClickHandler>) -> Self {
        Self {
            project,
            on_image_click,
        }
    }

    /// Identity comparison: both the project and the handler are the same
    /// allocations (or both absent).
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        same_arc(self.project.as_ref(), other.project.as_ref())
            && same_arc(self.on_image_click.as_ref(), other.on_image_click.as_ref())
    }
}

fn same_arc<T: ?Sized>(a: Option<&Arc<T>>, b: Option<&Arc<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Walk a widget tree depth-first, parents before children.
#[must_use]
pub fn descendants(root: &dyn Widget) -> Vec<&dyn Widget> {
    let mut out = Vec::new();
    let mut stack: Vec<&dyn Widget> = vec![root];
    while let Some(widget) = stack.pop() {
        out.push(widget);
        for child in widget.children().iter().rev() {
            stack.push(child.as_ref());
        }
    }
    out
}

/// The detail panel widget.
pub struct ProjectDetail {
    theme: Arc<Theme>,
    props: DetailProps,
    viewport_width: f32,
    hovered: bool,
    /// Empty for an absent project, otherwise the single content column
    content: Vec<Box<dyn Widget>>,
    area: Rect,
    bounds: Rect,
}

impl Default for ProjectDetail {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProjectDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectDetail")
            .field("theme", &self.theme.name)
            .field("props", &self.props)
            .field("viewport_width", &self.viewport_width)
            .field("hovered", &self.hovered)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl ProjectDetail {
    /// Empty panel with the default theme at a 1280px viewport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Arc::new(Theme::default()),
            props: DetailProps::default(),
            viewport_width: 1280.0,
            hovered: false,
            content: Vec::new(),
            area: Rect::default(),
            bounds: Rect::default(),
        }
    }

    /// Set the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<Arc<Theme>>) -> Self {
        self.theme = theme.into();
        self.rebuild();
        self
    }

    /// Set the project.
    #[must_use]
    pub fn with_project(mut self, project: impl Into<Arc<Project>>) -> Self {
        self.props.project = Some(project.into());
        self.rebuild();
        self
    }

    /// Set the image click handler.
    #[must_use]
    pub fn on_image_click(mut self, handler: ClickHandler) -> Self {
        self.props.on_image_click = Some(handler);
        self.rebuild();
        self
    }

    /// Set the viewport width media conditions are evaluated against.
    #[must_use]
    pub fn viewport(mut self, width: f32) -> Self {
        self.viewport_width = width;
        self.rebuild();
        self
    }

    /// Replace the props. Returns whether the tree was rebuilt; props that
    /// are the same by identity leave the panel untouched.
    pub fn set_props(&mut self, props: DetailProps) -> bool {
        if self.props.same_as(&props) {
            return false;
        }
        self.props = props;
        self.rebuild();
        true
    }

    /// Current props.
    #[must_use]
    pub const fn props(&self) -> &DetailProps {
        &self.props
    }

    /// Project shown, if any.
    #[must_use]
    pub fn project(&self) -> Option<&Project> {
        self.props.project.as_deref()
    }

    /// Theme in use.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether the pointer is over the panel.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    fn is_wide(&self) -> bool {
        self.theme
            .breakpoints
            .matches(Media::MdMin, self.viewport_width)
    }

    fn padding(&self) -> Insets {
        if !self.is_wide() {
            Insets::uniform(15.0)
        } else if self.hovered {
            Insets::new(60.0, 30.0, 30.0, 15.0)
        } else {
            Insets::new(60.0, 30.0, 30.0, 30.0)
        }
    }

    fn panel_width(&self, available: f32) -> f32 {
        if self.is_wide() {
            available * PANEL_WIDTH_RATIO
        } else {
            available
        }
    }

    /// Transform applied to the backdrop: shifted and skewed about its
    /// center, straight while hovered.
    #[must_use]
    pub fn backdrop_transform(&self) -> Transform2D {
        if self.hovered {
            return Transform2D::IDENTITY;
        }
        let c = self.backdrop_rect().center();
        Transform2D::translate(-c.x, -c.y)
            .then(&Transform2D::skew_x_degrees(BACKDROP_SKEW_DEG))
            .then(&Transform2D::translate(BACKDROP_SHIFT, 0.0))
            .then(&Transform2D::translate(c.x, c.y))
    }

    fn backdrop_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x - BACKDROP_BLEED,
            self.bounds.y,
            self.bounds.width + BACKDROP_BLEED,
            self.bounds.height,
        )
    }

    fn rebuild(&mut self) {
        self.content = match self.props.project.as_deref() {
            Some(project) => vec![Box::new(build_content(
                project,
                &self.theme,
                self.viewport_width,
                self.props.on_image_click.as_ref(),
            )) as Box<dyn Widget>],
            None => Vec::new(),
        };
        tracing::debug!(
            project = self.project().map(|p| p.name.as_str()),
            viewport = self.viewport_width,
            "rebuilt detail panel"
        );
        if self.area != Rect::default() {
            self.layout(self.area);
        }
    }
}

/// Build the content column for `project`.
fn build_content(
    project: &Project,
    theme: &Theme,
    viewport_width: f32,
    on_click: Option<&ClickHandler>,
) -> Group {
    let grey = theme.colors.grey;
    let body = |text: String| {
        Text::new(text)
            .font_size(BODY_SIZE)
            .font_family(theme.fonts.main.clone())
            .color(grey)
    };

    let title = Text::new(project.name.clone())
        .tag(TextTag::H1)
        .class("folio-title")
        .font_size(TITLE_SIZE)
        .font_weight(FontWeight::Medium)
        .font_family(theme.fonts.main.clone())
        .color(grey)
        .with_test_id("project-title");

    let description = Text::new(project.description.clone())
        .tag(TextTag::P)
        .class("folio-description")
        .font_size(BODY_SIZE)
        .font_family(theme.fonts.second.clone())
        .color(grey);

    let environments = Group::row("span")
        .class("folio-environments")
        .children_from(project.platforms().map(|p| PlatformIcon::new(p).color(grey)));

    let types = Group::row("span")
        .class("folio-types")
        .gap(8.0)
        .children_from(
            project
                .types
                .iter()
                .map(|t| body(t.clone()).class("folio-type").padded(true)),
        );

    let row = Group::row("div")
        .class("folio-row")
        .gap(4.0)
        .child(environments)
        .child(body(" | ".to_string()).class("folio-separator"))
        .child(types);

    let sources = Group::row("span")
        .class("folio-sources")
        .gap(4.0)
        .separator("|", grey)
        .children_from(
            project
                .sources
                .iter()
                .map(|s| body(capitalize_first(s)).class("folio-source")),
        );

    let info = Group::new("div")
        .class("folio-info")
        .gap(5.0)
        .child(description)
        .child(row)
        .child(sources);

    let mut column = Group::new("div").gap(10.0).child(title).child(info);

    if project.has_links() {
        let items = project.present_links().map(|entry| {
            Group::new("li")
                .role(AccessibleRole::ListItem)
                .child(Link::external(entry).color(grey).font_size(BODY_SIZE))
        });
        column = column.child(
            Group::new("ul")
                .class("folio-links")
                .role(AccessibleRole::List)
                .children_from(items),
        );
    }

    column.child(ImageGrid::new(
        &project.images,
        theme,
        viewport_width,
        on_click,
    ))
}

impl Widget for ProjectDetail {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let available = if constraints.max_width.is_finite() {
            constraints.max_width
        } else {
            self.viewport_width
        };
        let width = self.panel_width(available);
        let padding = self.padding();
        let inner = Constraints::width_bound((width - padding.horizontal()).max(0.0));
        let content_height: f32 = self.content.iter().map(|c| c.measure(inner).height).sum();
        constraints.constrain(Size::new(width, content_height + padding.vertical()))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.area = bounds;
        let width = self.panel_width(bounds.width);
        let padding = self.padding();
        let panel = Rect::new(bounds.x, bounds.y, width, bounds.height);
        let inner = panel.deflate(padding);

        let mut content_height = 0.0f32;
        for child in &mut self.content {
            let size = child.measure(Constraints::width_bound(inner.width));
            child.layout(Rect::new(inner.x, inner.y, inner.width, size.height));
            content_height += size.height;
        }

        // Full height of the area, growing when the content is taller.
        let height = bounds.height.max(content_height + padding.vertical());
        self.bounds = Rect::new(panel.x, panel.y, width, height);
        LayoutResult {
            size: self.bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.is_wide() {
            canvas.push_transform(self.backdrop_transform());
            canvas.fill_rect(self.backdrop_rect(), self.theme.colors.white);
            canvas.pop_transform();
        }
        for child in &self.content {
            child.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::Resize { width, .. } => {
                self.viewport_width = *width;
                if !self.is_wide() {
                    self.hovered = false;
                }
            }
            Event::MouseMove { position } => {
                let hovered = self.is_wide() && self.bounds.contains_point(position);
                if hovered != self.hovered {
                    self.hovered = hovered;
                    self.layout(self.area);
                }
            }
            Event::MouseLeave => {
                if self.hovered {
                    self.hovered = false;
                    self.layout(self.area);
                }
            }
            _ => {}
        }

        let mut message = None;
        for child in &mut self.content {
            if let Some(msg) = child.event(event) {
                message.get_or_insert(msg);
            }
        }

        if let Event::Resize { width, height } = event {
            let area = Rect::new(self.area.x, self.area.y, *width, *height);
            self.layout(area);
        }
        message
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.content
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.content
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    fn accessible_name(&self) -> Option<&str> {
        self.project().map(|p| p.name.as_str())
    }

    fn test_id(&self) -> Option<&str> {
        Some("project-detail")
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for ProjectDetail {
    fn brick_name(&self) -> &'static str {
        "ProjectDetail"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        const ASSERTIONS: &[BrickAssertion] = &[BrickAssertion::MaxLatencyMs(16)];
        ASSERTIONS
    }

    fn budget(&self) -> BrickBudget {
        BrickBudget::uniform(16)
    }

    fn verify(&self) -> BrickVerification {
        let mut verification = BrickVerification::all_passed(self.assertions());
        let shell = BrickAssertion::element_present(".folio-detail");
        if self.to_html().starts_with(r#"<div class="folio-detail""#) {
            verification.passed.push(shell);
        } else {
            verification
                .failed
                .push((shell, "panel container missing".to_string()));
        }
        verification
    }

    fn to_html(&self) -> String {
        let inner: String = self.content.iter().map(|c| c.to_html()).collect();
        format!(r#"<div class="folio-detail" data-testid="project-detail">{inner}</div>"#)
    }

    fn to_css(&self) -> String {
        styles::detail_stylesheet(&self.theme)
    }
}
