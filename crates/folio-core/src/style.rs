//! Stylesheet builder and the shared style mixins.
//!
//! Bricks describe their CSS as [`Rule`]s grouped into a [`StyleSheet`];
//! media blocks and keyframes are first-class so breakpoint rules read the
//! same as plain ones.

use std::fmt::Write as _;

/// A CSS property/value pair.
pub type Declaration = (String, String);

/// One selector with its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    selector: String,
    declarations: Vec<Declaration>,
}

impl Rule {
    /// Start a rule for `selector`.
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Add a declaration.
    #[must_use]
    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    /// Add a batch of declarations (a mixin).
    #[must_use]
    pub fn with(mut self, declarations: Vec<Declaration>) -> Self {
        self.declarations.extend(declarations);
        self
    }

    /// The rule's selector.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Value of the last declaration of `property`, if present.
    #[must_use]
    pub fn value(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    fn write(&self, out: &mut String, indent: &str) {
        let _ = writeln!(out, "{indent}{} {{", self.selector);
        for (property, value) in &self.declarations {
            let _ = writeln!(out, "{indent}  {property}: {value};");
        }
        let _ = writeln!(out, "{indent}}}");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Rule(Rule),
    Media { query: String, rules: Vec<Rule> },
    Keyframes { name: String, frames: Vec<Rule> },
}

/// Ordered collection of rules, media blocks and keyframes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    blocks: Vec<Block>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level rule.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.blocks.push(Block::Rule(rule));
        self
    }

    /// Append a media block (`query` is the full `@media (...)` text).
    #[must_use]
    pub fn media(mut self, query: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.blocks.push(Block::Media {
            query: query.into(),
            rules,
        });
        self
    }

    /// Append a `@keyframes` block; each frame is a rule whose selector is
    /// the frame offset (`from`, `to`, `50%`).
    #[must_use]
    pub fn keyframes(mut self, name: impl Into<String>, frames: Vec<Rule>) -> Self {
        self.blocks.push(Block::Keyframes {
            name: name.into(),
            frames,
        });
        self
    }

    /// Top-level rules matching `selector`.
    #[must_use]
    pub fn rules_for(&self, selector: &str) -> Vec<&Rule> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Rule(r) if r.selector == selector => Some(r),
                _ => None,
            })
            .collect()
    }

    /// Rules matching `selector` inside the media block for `query`.
    #[must_use]
    pub fn media_rules_for(&self, query: &str, selector: &str) -> Vec<&Rule> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Media { query: q, rules } if q == query => Some(rules),
                _ => None,
            })
            .flatten()
            .filter(|r| r.selector == selector)
            .collect()
    }

    /// Serialize to CSS text.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            match block {
                Block::Rule(rule) => rule.write(&mut out, ""),
                Block::Media { query, rules } => {
                    let _ = writeln!(out, "{query} {{");
                    for rule in rules {
                        rule.write(&mut out, "  ");
                    }
                    out.push_str("}\n");
                }
                Block::Keyframes { name, frames } => {
                    let _ = writeln!(out, "@keyframes {name} {{");
                    for frame in frames {
                        frame.write(&mut out, "  ");
                    }
                    out.push_str("}\n");
                }
            }
        }
        out
    }
}

fn decls(pairs: &[(&str, &str)]) -> Vec<Declaration> {
    pairs
        .iter()
        .map(|(p, v)| ((*p).to_string(), (*v).to_string()))
        .collect()
}

/// Pixel font size with a rem fallback for root-relative scaling.
#[must_use]
pub fn font_size(px: f32) -> Vec<Declaration> {
    vec![
        ("font-size".to_string(), format!("{px}px")),
        ("font-size".to_string(), format!("{}rem", px / 16.0)),
    ]
}

/// Flex container with flow, main-axis and cross-axis alignment.
#[must_use]
pub fn display_flex(flow: &str, justify: &str, align: &str) -> Vec<Declaration> {
    decls(&[
        ("display", "flex"),
        ("flex-flow", flow),
        ("justify-content", justify),
        ("align-items", align),
    ])
}

/// Single-line truncation with a trailing ellipsis.
#[must_use]
pub fn ellipsis(width: &str) -> Vec<Declaration> {
    decls(&[
        ("display", "inline-block"),
        ("max-width", width),
        ("overflow", "hidden"),
        ("text-overflow", "ellipsis"),
        ("white-space", "nowrap"),
        ("word-wrap", "normal"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_output() {
        let css = StyleSheet::new()
            .rule(Rule::new(".a").decl("margin", "0"))
            .to_css();
        assert_eq!(css, ".a {\n  margin: 0;\n}\n");
    }

    #[test]
    fn test_media_block_indented() {
        let css = StyleSheet::new()
            .media(
                "@media (max-width: 767px)",
                vec![Rule::new(".a").decl("width", "100%")],
            )
            .to_css();
        assert_eq!(
            css,
            "@media (max-width: 767px) {\n  .a {\n    width: 100%;\n  }\n}\n"
        );
    }

    #[test]
    fn test_keyframes() {
        let css = StyleSheet::new()
            .keyframes(
                "slide",
                vec![
                    Rule::new("from").decl("opacity", "0"),
                    Rule::new("to").decl("opacity", "1"),
                ],
            )
            .to_css();
        assert!(css.starts_with("@keyframes slide {\n  from {"));
    }

    #[test]
    fn test_font_size_mixin() {
        let rule = Rule::new(".t").with(font_size(24.0));
        assert_eq!(rule.value("font-size"), Some("1.5rem"));
        assert_eq!(rule.declarations.len(), 2);
        assert_eq!(rule.declarations[0].1, "24px");
    }

    #[test]
    fn test_display_flex_mixin() {
        let rule = Rule::new(".g").with(display_flex("column wrap", "center", "flex-start"));
        assert_eq!(rule.value("flex-flow"), Some("column wrap"));
        assert_eq!(rule.value("align-items"), Some("flex-start"));
    }

    #[test]
    fn test_ellipsis_mixin() {
        let rule = Rule::new(".c").with(ellipsis("100%"));
        assert_eq!(rule.value("text-overflow"), Some("ellipsis"));
        assert_eq!(rule.value("max-width"), Some("100%"));
    }

    #[test]
    fn test_lookup_helpers() {
        let sheet = StyleSheet::new()
            .rule(Rule::new(".a").decl("color", "red"))
            .media("@media (x)", vec![Rule::new(".a").decl("color", "blue")]);
        assert_eq!(sheet.rules_for(".a")[0].value("color"), Some("red"));
        assert_eq!(
            sheet.media_rules_for("@media (x)", ".a")[0].value("color"),
            Some("blue")
        );
        assert!(sheet.media_rules_for("@media (y)", ".a").is_empty());
    }
}
