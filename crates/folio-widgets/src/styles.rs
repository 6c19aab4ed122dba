//! Stylesheets for the detail panel and its image grid.
//!
//! Everything is derived from a [`Theme`]: colors and fonts fill the
//! declarations and the breakpoints pick the media queries, so a manifest
//! that overrides the theme gets a matching stylesheet.

use folio_core::style::{display_flex, ellipsis, font_size};
use folio_core::{Breakpoints, Fonts, Media, Palette, Rule, StyleSheet, Theme};

/// Name of the entrance animation.
pub const SLIDE_IN_RIGHT: &str = "slideInRight";

/// Panel, heading, info group, tags and link list.
#[must_use]
pub fn panel_sheet(theme: &Theme) -> StyleSheet {
    let bp = &theme.breakpoints;
    let colors = &theme.colors;
    let grey = colors.grey.to_css();

    StyleSheet::new()
        .keyframes(
            SLIDE_IN_RIGHT,
            vec![
                Rule::new("from")
                    .decl("transform", "translate3d(100%, 0, 0)")
                    .decl("visibility", "visible"),
                Rule::new("to").decl("transform", "translate3d(0, 0, 0)"),
            ],
        )
        .rule(
            Rule::new(".folio-detail")
                .decl("height", "100%")
                .decl("box-sizing", "border-box")
                .decl("position", "relative")
                .decl("z-index", "2")
                .decl("transition", "padding .7s ease"),
        )
        .media(
            bp.query(Media::LgMin),
            vec![Rule::new(".folio-detail")
                .decl("animation", format!("{SLIDE_IN_RIGHT} 0.5s forwards ease"))],
        )
        .media(
            bp.query(Media::MdMin),
            vec![
                Rule::new(".folio-detail")
                    .decl("color", grey.clone())
                    .decl("width", "35%")
                    .decl("padding", "60px 30px 30px"),
                Rule::new(".folio-detail::before")
                    .decl("content", "''")
                    .decl("z-index", "-1")
                    .decl("position", "absolute")
                    .decl("top", "0")
                    .decl("left", "-30px")
                    .decl("right", "0")
                    .decl("bottom", "0")
                    .decl("background-color", colors.white.to_css())
                    .decl("transform", "translate3d(24px, 0px, 41px) skew(-3deg, 0)")
                    .decl("outline", "1px solid transparent")
                    .decl("backface-visibility", "hidden")
                    .decl("transition", "all .7s ease"),
                Rule::new(".folio-detail:hover").decl("padding-left", "15px"),
                Rule::new(".folio-detail:hover::before")
                    .decl("transform", "translate3d(0px, 0px, 0px) skew(0, 0)"),
            ],
        )
        .media(
            bp.query(Media::SmMax),
            vec![Rule::new(".folio-detail")
                .decl("width", "100%")
                .decl("color", grey)
                .decl("padding", "15px")],
        )
        .rule(
            Rule::new(".folio-title")
                .with(font_size(24.0))
                .decl("margin", "0")
                .decl("padding", "0")
                .decl("font-weight", "500"),
        )
        .rule(
            Rule::new(".folio-description")
                .with(font_size(14.0))
                .decl("margin", "5px 0 0 0")
                .decl("font-family", theme.fonts.second.clone())
                .decl("font-weight", "400"),
        )
        .rule(
            Rule::new(".folio-info")
                .decl("text-align", "left")
                .decl("line-height", "1.6")
                .with(display_flex("column wrap", "center", "flex-start")),
        )
        .rule(Rule::new(".folio-row").with(display_flex("row", "flex-start", "center")))
        .rule(
            Rule::new(".folio-environments")
                .decl("text-align", "left")
                .decl("line-height", "1"),
        )
        .rule(Rule::new(".folio-icon").decl("margin", "0 5px"))
        .rule(Rule::new(".folio-sources").with(font_size(14.0)))
        .rule(Rule::new(".folio-source:not(:first-of-type)::before").decl("content", "'|'"))
        .rule(
            Rule::new(".folio-links")
                .decl("padding-left", "15px")
                .decl("margin", "10px 0"),
        )
        .rule(Rule::new(".folio-links a").decl("text-decoration", "underline"))
}

/// Grid container.
#[must_use]
pub fn grid_sheet(bp: &Breakpoints, colors: &Palette) -> StyleSheet {
    StyleSheet::new()
        .rule(
            Rule::new(".folio-grid")
                .decl("display", "grid")
                .decl("grid-gap", "10px"),
        )
        .media(
            bp.query(Media::XlMin),
            vec![Rule::new(".folio-grid").decl("grid-template-columns", "1fr 1fr 1fr")],
        )
        .media(
            bp.query(Media::XlMax),
            vec![Rule::new(".folio-grid")
                .decl("grid-template-columns", "1fr 1fr")
                .decl("grid-template-rows", "1fr")],
        )
        .media(
            bp.query(Media::SmMax),
            vec![Rule::new(".folio-grid")
                .decl("grid-template-columns", "1fr")
                .decl("grid-template-rows", "1fr")
                .decl("grid-gap", "30px")
                .decl("border-top", format!("1px solid {}", colors.line.to_css()))
                .decl("padding-top", "20px")],
        )
}

/// Grid cell, image and caption.
#[must_use]
pub fn cell_sheet(bp: &Breakpoints, colors: &Palette, fonts: &Fonts) -> StyleSheet {
    let sized = || {
        vec![Rule::new(".folio-cell")
            .decl("height", "120px")
            .decl("cursor", "pointer")]
    };

    StyleSheet::new()
        .rule(Rule::new(".folio-cell").decl("transition", "all .3s ease"))
        .media(bp.query(Media::LgMin), sized())
        .media(bp.query(Media::MdMax), sized())
        .media(
            bp.query(Media::SmMax),
            vec![Rule::new(".folio-cell")
                .decl("height", "auto")
                .decl("width", "100%")
                .decl("pointer-events", "none")],
        )
        .rule(
            Rule::new(".folio-image")
                .decl("width", "100%")
                .decl("height", "100%")
                .decl("border", format!("1px solid {}", colors.line.to_css()))
                .decl("box-shadow", "2px 1px 1px 0px rgba(0,0,0,0.05)")
                .decl("background-color", colors.mist.to_css())
                .decl("object-fit", "contain")
                .decl("object-position", "center")
                .decl("filter", "grayscale(90%)")
                .decl("transition", "filter .3s ease")
                .decl("user-select", "none"),
        )
        .rule(
            Rule::new(".folio-image:hover, .folio-image:active, .folio-image:focus")
                .decl("filter", "none"),
        )
        .media(
            bp.query(Media::SmMax),
            vec![
                Rule::new(".folio-image").decl("filter", "none"),
                Rule::new(".folio-caption")
                    .with(ellipsis("100%"))
                    .decl("font-weight", "500")
                    .decl("font-family", fonts.second.clone()),
            ],
        )
        .media(
            bp.query(Media::MdMin),
            vec![Rule::new(".folio-caption").decl("display", "none")],
        )
}

/// Complete stylesheet for a detail panel.
#[must_use]
pub fn detail_stylesheet(theme: &Theme) -> String {
    let mut css = panel_sheet(theme).to_css();
    css.push_str(&grid_sheet(&theme.breakpoints, &theme.colors).to_css());
    css.push_str(&cell_sheet(&theme.breakpoints, &theme.colors, &theme.fonts).to_css());
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Color;

    #[test]
    fn test_panel_width_and_backdrop() {
        let theme = Theme::default();
        let sheet = panel_sheet(&theme);
        let md = theme.breakpoints.query(Media::MdMin);

        let panel = sheet.media_rules_for(&md, ".folio-detail");
        assert_eq!(panel[0].value("width"), Some("35%"));
        assert_eq!(panel[0].value("color"), Some("#4a4a4a"));

        let before = sheet.media_rules_for(&md, ".folio-detail::before");
        assert!(before[0]
            .value("transform")
            .is_some_and(|t| t.contains("skew(-3deg, 0)")));

        let hover = sheet.media_rules_for(&md, ".folio-detail:hover");
        assert_eq!(hover[0].value("padding-left"), Some("15px"));
    }

    #[test]
    fn test_narrow_panel_full_width() {
        let theme = Theme::default();
        let sheet = panel_sheet(&theme);
        let rules = sheet.media_rules_for("@media (max-width: 767px)", ".folio-detail");
        assert_eq!(rules[0].value("width"), Some("100%"));
        assert_eq!(rules[0].value("padding"), Some("15px"));
    }

    #[test]
    fn test_animation_only_on_large() {
        let css = panel_sheet(&Theme::default()).to_css();
        assert!(css.contains("@keyframes slideInRight {"));
        assert!(css.contains(
            "@media (min-width: 992px) {\n  .folio-detail {\n    animation: slideInRight 0.5s forwards ease;"
        ));
    }

    #[test]
    fn test_sources_separator_rule() {
        let sheet = panel_sheet(&Theme::default());
        let rules = sheet.rules_for(".folio-source:not(:first-of-type)::before");
        assert_eq!(rules[0].value("content"), Some("'|'"));
    }

    #[test]
    fn test_grid_columns_per_breakpoint() {
        let bp = Breakpoints::default();
        let sheet = grid_sheet(&bp, &Palette::default());
        let xl = sheet.media_rules_for(&bp.query(Media::XlMin), ".folio-grid");
        assert_eq!(xl[0].value("grid-template-columns"), Some("1fr 1fr 1fr"));
        let below = sheet.media_rules_for(&bp.query(Media::XlMax), ".folio-grid");
        assert_eq!(below[0].value("grid-template-columns"), Some("1fr 1fr"));
        let narrow = sheet.media_rules_for(&bp.query(Media::SmMax), ".folio-grid");
        assert_eq!(narrow[0].value("grid-template-columns"), Some("1fr"));
        assert_eq!(narrow[0].value("grid-gap"), Some("30px"));
    }

    #[test]
    fn test_grid_border_uses_line_color() {
        let colors = Palette {
            line: Color::rgb(1.0, 0.0, 0.0),
            ..Palette::default()
        };
        let bp = Breakpoints::default();
        let sheet = grid_sheet(&bp, &colors);
        let narrow = sheet.media_rules_for(&bp.query(Media::SmMax), ".folio-grid");
        assert_eq!(narrow[0].value("border-top"), Some("1px solid #ff0000"));
    }

    #[test]
    fn test_cell_rules() {
        let bp = Breakpoints::default();
        let sheet = cell_sheet(&bp, &Palette::default(), &Fonts::default());
        let lg = sheet.media_rules_for(&bp.query(Media::LgMin), ".folio-cell");
        assert_eq!(lg[0].value("height"), Some("120px"));
        let narrow = sheet.media_rules_for(&bp.query(Media::SmMax), ".folio-cell");
        assert_eq!(narrow[0].value("pointer-events"), Some("none"));
        let image = sheet.rules_for(".folio-image");
        assert_eq!(image[0].value("filter"), Some("grayscale(90%)"));
        let caption = sheet.media_rules_for(&bp.query(Media::MdMin), ".folio-caption");
        assert_eq!(caption[0].value("display"), Some("none"));
        let narrow_caption = sheet.media_rules_for(&bp.query(Media::SmMax), ".folio-caption");
        assert_eq!(narrow_caption[0].value("text-overflow"), Some("ellipsis"));
    }

    #[test]
    fn test_custom_breakpoints_move_queries() {
        let theme = Theme::default().with_breakpoints(Breakpoints {
            xl: 1400.0,
            ..Breakpoints::default()
        });
        let css = detail_stylesheet(&theme);
        assert!(css.contains("@media (min-width: 1400px)"));
        assert!(css.contains("@media (max-width: 1399px)"));
        assert!(!css.contains("1200px"));
    }
}
