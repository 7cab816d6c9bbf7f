//! Page metadata consumed by the collection index.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Shared handle to a page.
///
/// The same page usually sits in several collections at once (raw, working
/// set, one of the caches), so pages are reference counted rather than cloned.
pub type PageRef = Arc<Page>;

/// Classification of a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageKind {
    /// Regular content page.
    Page,
    /// Site home page.
    Home,
    /// Section listing.
    Section,
    /// Taxonomy listing (e.g. a single tag).
    Taxonomy,
    /// Taxonomy term listing (e.g. all tags).
    TaxonomyTerm,
    /// Not classified. Never valid inside the working set.
    Unknown,
}

impl PageKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Page,
        Self::Home,
        Self::Section,
        Self::Taxonomy,
        Self::TaxonomyTerm,
        Self::Unknown,
    ];

    /// Name used in serialized page data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Home => "home",
            Self::Section => "section",
            Self::Taxonomy => "taxonomy",
            Self::TaxonomyTerm => "taxonomyTerm",
            Self::Unknown => "unknown",
        }
    }

    /// True for list-like kinds (everything except regular pages).
    #[inline]
    #[must_use]
    pub const fn is_node(self) -> bool {
        !matches!(self, Self::Page)
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`PageKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized page kind: {0}")]
pub struct ParsePageKindError(String);

impl FromStr for PageKind {
    type Err = ParsePageKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParsePageKindError(s.to_owned()))
    }
}

/// Content page metadata.
///
/// Built by content discovery and handed to
/// [`PageCollections`](crate::PageCollections). Only the fields needed to
/// classify and locate a page live here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page classification.
    pub kind: PageKind,
    /// Section path from the content root (e.g. `["blog", "2016"]`).
    #[serde(default)]
    pub sections: Vec<String>,
    /// Source file path relative to the content directory. Identifies the page.
    pub file_path: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Language code. `None` means the site's default language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Draft pages are dropped from the working set unless drafts are built.
    #[serde(default)]
    pub draft: bool,
}

impl Page {
    /// Create a page with the given kind and source file path.
    #[must_use]
    pub fn new(kind: PageKind, file_path: impl Into<String>) -> Self {
        Self {
            kind,
            sections: Vec::new(),
            file_path: file_path.into(),
            title: String::new(),
            lang: None,
            draft: false,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections = sections.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    #[must_use]
    pub const fn with_draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    /// Check whether the page's sections begin with `segments`.
    ///
    /// An empty `segments` never matches; callers that want "any page"
    /// must handle that case themselves.
    #[must_use]
    pub fn in_sections(&self, segments: &[&str]) -> bool {
        !segments.is_empty()
            && self.sections.len() >= segments.len()
            && self.sections.iter().zip(segments).all(|(have, want)| have == want)
    }

    /// Wrap the page in a shared handle.
    #[must_use]
    pub fn into_ref(self) -> PageRef {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in PageKind::ALL {
            assert_eq!(kind.as_str().parse::<PageKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_kind_parse_unrecognized() {
        let err = "taxonomyterm".parse::<PageKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized page kind: taxonomyterm");
    }

    #[test]
    fn test_kind_is_node() {
        assert!(!PageKind::Page.is_node());
        assert!(PageKind::Home.is_node());
        assert!(PageKind::Section.is_node());
        assert!(PageKind::Taxonomy.is_node());
        assert!(PageKind::TaxonomyTerm.is_node());
        assert!(PageKind::Unknown.is_node());
    }

    #[test]
    fn test_kind_serializes_camel_case() {
        let json = serde_json::to_string(&PageKind::TaxonomyTerm).unwrap();
        assert_eq!(json, "\"taxonomyTerm\"");
        assert_eq!(PageKind::TaxonomyTerm.to_string(), "taxonomyTerm");
    }

    #[test]
    fn test_page_deserialize_defaults() {
        let page: Page =
            serde_json::from_str(r#"{"kind": "section", "file_path": "blog/_index.md"}"#).unwrap();

        assert_eq!(page, Page::new(PageKind::Section, "blog/_index.md"));
    }

    #[test]
    fn test_page_deserialize_full() {
        let page: Page = serde_json::from_str(
            r#"{
                "kind": "page",
                "sections": ["blog", "2016"],
                "file_path": "blog/2016/hello.md",
                "title": "Hello",
                "lang": "fr",
                "draft": true
            }"#,
        )
        .unwrap();

        let expected = Page::new(PageKind::Page, "blog/2016/hello.md")
            .with_sections(["blog", "2016"])
            .with_title("Hello")
            .with_lang("fr")
            .with_draft(true);
        assert_eq!(page, expected);
    }

    #[test]
    fn test_in_sections_prefix() {
        let page = Page::new(PageKind::Page, "a/b/c.md").with_sections(["a", "b", "c"]);

        assert!(page.in_sections(&["a"]));
        assert!(page.in_sections(&["a", "b"]));
        assert!(page.in_sections(&["a", "b", "c"]));
        assert!(!page.in_sections(&["b"]));
        assert!(!page.in_sections(&["a", "c"]));
    }

    #[test]
    fn test_in_sections_longer_than_page() {
        let page = Page::new(PageKind::Page, "a/x.md").with_sections(["a"]);

        assert!(!page.in_sections(&["a", "b"]));
    }

    #[test]
    fn test_in_sections_empty_never_matches() {
        let page = Page::new(PageKind::Home, "_index.md");

        assert!(!page.in_sections(&[]));
    }
}
