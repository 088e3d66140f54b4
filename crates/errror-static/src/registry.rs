//! Page registry mapping page identifiers to their display metadata.
//!
//! The registry is built once at startup, either from the built-in site table
//! or from the configuration file, and is never modified afterwards.

use std::collections::BTreeMap;

use serde::Serialize;

/// Display metadata for one page.
///
/// Serialized as the data context of the page's template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageConfig {
    /// Identifier, matching the page template's file stem
    pub identifier: String,

    /// Document title
    pub title: String,

    /// Meta description
    pub description: String,

    /// Stylesheet key, usually the stem of a file under `css/`
    pub stylesheet: String,

    /// Navigation entry to highlight, empty for none
    pub active_nav: String,
}

impl PageConfig {
    /// Create a page config whose stylesheet and active nav keys both equal the identifier.
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let identifier = identifier.into();
        Self {
            stylesheet: identifier.clone(),
            active_nav: identifier.clone(),
            identifier,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Override the stylesheet key.
    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = stylesheet.into();
        self
    }

    /// Override the active nav key.
    pub fn with_active_nav(mut self, active_nav: impl Into<String>) -> Self {
        self.active_nav = active_nav.into();
        self
    }
}

/// Immutable table of known pages, keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRegistry {
    pages: BTreeMap<String, PageConfig>,
}

impl PageRegistry {
    /// The pages of the Trial and Errror site.
    pub fn builtin() -> Self {
        [
            PageConfig::new(
                "index",
                "Trial and Errror - Home",
                "Trial and Errror - Web Development, Technical Consulting, and Video Content Development. Learn about our services and projects.",
            )
            .with_active_nav(""),
            PageConfig::new(
                "about",
                "Trial and Errror - About",
                "About Trial and Errror - Learn about our web development services, technical consulting, and educational video content. Founded on the principle that everyone makes mistakes.",
            ),
            PageConfig::new(
                "projects",
                "Trial and Errror - Projects",
                "Projects by Trial and Errror - View our professional web applications, personal projects, and portfolio of work in web development and technology.",
            ),
            PageConfig::new(
                "wade",
                "Trial and Errror - Meet Wade",
                "Meet Wade Green - Software Engineer, Attorney at Law, and Technology Educator. View Wade's professional experience, skills, and background.",
            ),
        ]
        .into_iter()
        .collect()
    }

    /// Look up a page by identifier.
    pub fn get(&self, identifier: &str) -> Option<&PageConfig> {
        self.pages.get(identifier)
    }

    /// Registered identifiers in sorted order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl FromIterator<PageConfig> for PageRegistry {
    /// Later entries replace earlier ones with the same identifier.
    fn from_iter<I: IntoIterator<Item = PageConfig>>(iter: I) -> Self {
        let pages = iter
            .into_iter()
            .map(|page| (page.identifier.clone(), page))
            .collect();
        Self { pages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_has_site_pages() {
        let registry = PageRegistry::builtin();

        assert_eq!(
            registry.identifiers().collect::<Vec<_>>(),
            vec!["about", "index", "projects", "wade"]
        );

        let index = registry.get("index").unwrap();
        assert_eq!(index.title, "Trial and Errror - Home");
        assert_eq!(index.stylesheet, "index");
        assert_eq!(index.active_nav, "");

        let about = registry.get("about").unwrap();
        assert_eq!(about.active_nav, "about");
    }

    #[test]
    fn later_entries_replace_earlier_ones() {
        let registry: PageRegistry = [
            PageConfig::new("index", "First", ""),
            PageConfig::new("index", "Second", ""),
        ]
        .into_iter()
        .collect();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("index").unwrap().title, "Second");
    }

    #[test]
    fn unknown_identifier_is_absent() {
        let registry = PageRegistry::builtin();

        assert!(registry.get("mystery").is_none());
    }
}
