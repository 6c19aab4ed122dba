//! Showcase project records.
//!
//! A [`Project`] is read-only input to the detail panel. Every list may be
//! empty and `links` may be absent altogether; the panel renders nothing for
//! whatever is missing.
//!
//! # Examples
//!
//! ```
//! use folio_core::{Platform, Project};
//!
//! let project = Project::new("Demo")
//!     .environment("PC")
//!     .environment("vr")
//!     .link("")
//!     .link("demo.com");
//!
//! assert_eq!(project.platforms().collect::<Vec<_>>(), vec![Platform::Pc]);
//! assert_eq!(project.present_links().collect::<Vec<_>>(), vec!["demo.com"]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// One showcased work.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Platform tags such as "pc" or "mobile"
    pub environments: Vec<String>,
    /// Category tags
    pub types: Vec<String>,
    /// Attribution tags
    pub sources: Vec<String>,
    /// External links without scheme; `None` when the record has no list
    /// at all, and entries may be absent or empty
    pub links: Option<Vec<Option<String>>>,
    /// Screenshots
    pub images: Vec<ProjectImage>,
}

/// A screenshot with its caption.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectImage {
    /// Image source
    pub url: String,
    /// Caption and alt text
    pub description: String,
}

impl ProjectImage {
    /// Create an image entry.
    #[must_use]
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
        }
    }
}

/// Platforms with a dedicated icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// Desktop computer
    Pc,
    /// Phone or tablet
    Mobile,
}

impl Platform {
    /// Case-insensitive match; anything else has no icon.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("pc") {
            Some(Self::Pc)
        } else if tag.eq_ignore_ascii_case("mobile") {
            Some(Self::Mobile)
        } else {
            None
        }
    }

    /// Lowercase identifier used in class names.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Pc => "pc",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pc => f.write_str("PC"),
            Self::Mobile => f.write_str("Mobile"),
        }
    }
}

impl Project {
    /// Create a project with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a platform tag.
    #[must_use]
    pub fn environment(mut self, tag: impl Into<String>) -> Self {
        self.environments.push(tag.into());
        self
    }

    /// Append a category tag.
    #[must_use]
    pub fn kind(mut self, tag: impl Into<String>) -> Self {
        self.types.push(tag.into());
        self
    }

    /// Append an attribution tag.
    #[must_use]
    pub fn source(mut self, tag: impl Into<String>) -> Self {
        self.sources.push(tag.into());
        self
    }

    /// Append a link entry, creating the list if absent.
    #[must_use]
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.links.get_or_insert_with(Vec::new).push(Some(link.into()));
        self
    }

    /// Append a screenshot.
    #[must_use]
    pub fn image(mut self, url: impl Into<String>, description: impl Into<String>) -> Self {
        self.images.push(ProjectImage::new(url, description));
        self
    }

    /// Recognised platforms, in declaration order.
    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        self.environments.iter().filter_map(|tag| Platform::parse(tag))
    }

    /// Whether a link list exists and has at least one entry (present or not).
    #[must_use]
    pub fn has_links(&self) -> bool {
        self.links.as_ref().is_some_and(|links| !links.is_empty())
    }

    /// Non-empty link entries, in declaration order.
    pub fn present_links(&self) -> impl Iterator<Item = &str> + '_ {
        self.links
            .iter()
            .flatten()
            .filter_map(|entry| entry.as_deref())
            .filter(|entry| !entry.is_empty())
    }
}

/// Uppercase the first character, leaving the rest unchanged.
#[must_use]
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_platform_parse_case_insensitive() {
        assert_eq!(Platform::parse("PC"), Some(Platform::Pc));
        assert_eq!(Platform::parse("pc"), Some(Platform::Pc));
        assert_eq!(Platform::parse("Mobile"), Some(Platform::Mobile));
        assert_eq!(Platform::parse("vr"), None);
        assert_eq!(Platform::parse(""), None);
        assert_eq!(Platform::parse("pc "), None);
    }

    #[test]
    fn test_platform_display_and_slug() {
        assert_eq!(Platform::Pc.to_string(), "PC");
        assert_eq!(Platform::Mobile.slug(), "mobile");
    }

    #[test]
    fn test_platforms_keep_order_and_duplicates() {
        let p = Project::new("x")
            .environment("mobile")
            .environment("switch")
            .environment("PC")
            .environment("Mobile");
        assert_eq!(
            p.platforms().collect::<Vec<_>>(),
            vec![Platform::Mobile, Platform::Pc, Platform::Mobile]
        );
    }

    #[test]
    fn test_links_absent_empty_and_falsy() {
        let absent = Project::new("x");
        assert!(!absent.has_links());
        assert_eq!(absent.present_links().count(), 0);

        let empty = Project {
            links: Some(vec![]),
            ..Project::default()
        };
        assert!(!empty.has_links());

        let falsy = Project {
            links: Some(vec![None, Some(String::new())]),
            ..Project::default()
        };
        assert!(falsy.has_links());
        assert_eq!(falsy.present_links().count(), 0);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("github"), "Github");
        assert_eq!(capitalize_first("itch"), "Itch");
        assert_eq!(capitalize_first("gitHUB"), "GitHUB");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("éclair"), "Éclair");
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let p: Project = serde_json::from_str(r#"{"name":"Demo"}"#).unwrap();
        assert_eq!(p.name, "Demo");
        assert!(p.links.is_none());
        assert!(p.images.is_empty());
    }

    #[test]
    fn test_deserialize_links_with_nulls() {
        let p: Project = serde_json::from_str(r#"{"links":[null,"","a.io"]}"#).unwrap();
        assert_eq!(p.present_links().collect::<Vec<_>>(), vec!["a.io"]);
    }

    proptest! {
        #[test]
        fn prop_capitalize_keeps_tail(first in "[a-z]", tail in "[a-zA-Z0-9 ]{0,20}") {
            let input = format!("{first}{tail}");
            let out = capitalize_first(&input);
            prop_assert_eq!(&out[1..], tail.as_str());
            prop_assert_eq!(out.chars().next(), first.to_uppercase().chars().next());
        }

        #[test]
        fn prop_platforms_only_known(tags in proptest::collection::vec("(?i)(pc|mobile|vr|web|console)", 0..12)) {
            let mut project = Project::new("p");
            for tag in &tags {
                project = project.environment(tag.clone());
            }
            let expected = tags
                .iter()
                .filter(|t| t.eq_ignore_ascii_case("pc") || t.eq_ignore_ascii_case("mobile"))
                .count();
            prop_assert_eq!(project.platforms().count(), expected);
        }
    }
}
