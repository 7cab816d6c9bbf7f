//! Page collections for a site build.
//!
//! [`PageCollections`] keeps five related page sequences:
//!
//! - raw pages: everything discovered, including drafts and every language.
//!   The mutation operations act on this list only.
//! - all pages: every language, all kinds.
//! - pages: the working set, current language only, all kinds.
//! - index pages and regular pages: caches partitioning the working set into
//!   list-like pages and regular content pages.
//!
//! The caches are rebuilt only by [`PageCollections::refresh_page_caches`].
//! After changing the working set they keep showing the previous partition
//! until the next refresh.

use folio_config::ContentConfig;

use crate::page::{PageKind, PageRef};
use crate::pages::Pages;

/// Named page sequence for the `*_in` finders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSource {
    /// The working set.
    Pages,
    /// Every language, all kinds.
    AllPages,
    /// Cached list-like pages of the working set.
    IndexPages,
    /// The raw, unfiltered list.
    RawPages,
}

/// Page collections of a single site.
#[derive(Clone, Debug, Default)]
pub struct PageCollections {
    pages: Pages,
    all_pages: Pages,
    index_pages: Pages,
    regular_pages: Pages,
    raw_pages: Pages,
}

impl PageCollections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create collections seeded with a raw page list.
    ///
    /// The working set and caches stay empty until populated separately.
    #[must_use]
    pub fn from_raw(pages: impl Into<Pages>) -> Self {
        Self {
            raw_pages: pages.into(),
            ..Self::default()
        }
    }

    /// Working set: current language, all kinds.
    #[must_use]
    pub const fn pages(&self) -> &Pages {
        &self.pages
    }

    /// All languages, all kinds.
    #[must_use]
    pub const fn all_pages(&self) -> &Pages {
        &self.all_pages
    }

    /// Cached list-like pages (home, sections, taxonomies) of the working set.
    #[must_use]
    pub const fn index_pages(&self) -> &Pages {
        &self.index_pages
    }

    /// Cached regular content pages of the working set.
    #[must_use]
    pub const fn regular_pages(&self) -> &Pages {
        &self.regular_pages
    }

    /// Raw list, including drafts and every language.
    #[must_use]
    pub const fn raw_pages(&self) -> &Pages {
        &self.raw_pages
    }

    #[must_use]
    pub const fn pages_in(&self, source: PageSource) -> &Pages {
        match source {
            PageSource::Pages => &self.pages,
            PageSource::AllPages => &self.all_pages,
            PageSource::IndexPages => &self.index_pages,
            PageSource::RawPages => &self.raw_pages,
        }
    }

    /// Replace the working set. Caches are left untouched.
    pub fn set_pages(&mut self, pages: impl Into<Pages>) {
        self.pages = pages.into();
    }

    /// Replace the all-languages set.
    pub fn set_all_pages(&mut self, pages: impl Into<Pages>) {
        self.all_pages = pages.into();
    }

    /// Rebuild the all-languages set and the working set from the raw list.
    ///
    /// Drafts are dropped unless `content.build_drafts` is set; the working set
    /// keeps only pages in `content.language`. Caches are not refreshed.
    pub fn assemble(&mut self, content: &ContentConfig) {
        self.all_pages = self
            .raw_pages
            .iter()
            .filter(|p| content.build_drafts || !p.draft)
            .cloned()
            .collect();

        self.pages = self
            .all_pages
            .iter()
            .filter(|p| content.is_current_language(p.lang.as_deref()))
            .cloned()
            .collect();

        tracing::debug!(
            raw = self.raw_pages.len(),
            all = self.all_pages.len(),
            pages = self.pages.len(),
            language = %content.language,
            "Assembled page collections"
        );
    }

    /// Rebuild the index and regular page caches from the working set.
    ///
    /// # Panics
    ///
    /// Panics if the working set contains a page of kind
    /// [`PageKind::Unknown`]. Classification happens upstream, so such a
    /// page is a bug there and the build cannot continue.
    pub fn refresh_page_caches(&mut self) {
        self.index_pages = self.pages.excluding_kind(PageKind::Page);
        self.regular_pages = self.pages.by_kind(PageKind::Page);

        if let Some(page) = self.pages.iter().find(|p| p.kind == PageKind::Unknown) {
            panic!("Got unknown type {}", page.title);
        }

        tracing::debug!(
            index = self.index_pages.len(),
            regular = self.regular_pages.len(),
            "Refreshed page caches"
        );
    }

    /// Working-set pages of `kind`.
    #[must_use]
    pub fn find_by_kind(&self, kind: PageKind) -> Pages {
        self.pages.by_kind(kind)
    }

    /// Pages of `kind` in the named sequence.
    #[must_use]
    pub fn find_by_kind_in(&self, kind: PageKind, source: PageSource) -> Pages {
        self.pages_in(source).by_kind(kind)
    }

    /// Pages of any kind but `kind` in the named sequence.
    #[must_use]
    pub fn find_by_kind_not_in(&self, kind: PageKind, source: PageSource) -> Pages {
        self.pages_in(source).excluding_kind(kind)
    }

    /// Cached index pages of `kind`. Reflects the last cache refresh.
    #[must_use]
    pub fn find_index_nodes_by_kind(&self, kind: PageKind) -> Pages {
        self.index_pages.by_kind(kind)
    }

    /// Same as [`find_by_kind`](Self::find_by_kind).
    #[must_use]
    pub fn find_all_by_kind(&self, kind: PageKind) -> Pages {
        self.find_by_kind(kind)
    }

    /// Raw pages of `kind`.
    #[must_use]
    pub fn find_raw_by_kind(&self, kind: PageKind) -> Pages {
        self.raw_pages.by_kind(kind)
    }

    /// Look up a single working-set page by kind and section path.
    ///
    /// With no `sections`, returns the page only when it is the sole page of
    /// that kind; several candidates yield `None` rather than an arbitrary
    /// pick. Otherwise returns the first page of `kind` whose sections start
    /// with `sections`.
    #[must_use]
    pub fn get_page(&self, kind: PageKind, sections: &[&str]) -> Option<&PageRef> {
        let mut candidates = self.pages.iter().filter(|p| p.kind == kind);

        if sections.is_empty() {
            let first = candidates.next()?;
            return candidates.next().is_none().then_some(first);
        }

        candidates.find(|p| p.in_sections(sections))
    }

    /// Append a page to the raw list. Duplicates are not checked.
    pub fn add_page(&mut self, page: PageRef) {
        tracing::trace!(path = %page.file_path, kind = %page.kind, "Adding page");
        self.raw_pages.push(page);
    }

    /// Remove the first raw page whose source file path equals `path`.
    ///
    /// Does nothing if there is no such page.
    pub fn remove_page_by_path(&mut self, path: &str) {
        if let Some(pos) = self.raw_pages.find_pos_by_file_path(path) {
            self.raw_pages.remove(pos);
            tracing::debug!(path = %path, "Removed page");
        } else {
            tracing::debug!(path = %path, "No page to remove");
        }
    }

    /// Remove `page` (or the first raw page sharing its source file path).
    pub fn remove_page(&mut self, page: &PageRef) {
        if let Some(pos) = self.raw_pages.find_pos(page) {
            self.raw_pages.remove(pos);
            tracing::debug!(path = %page.file_path, "Removed page");
        }
    }

    /// Replace the raw page at `page`'s source file path.
    ///
    /// Implemented as remove followed by add, so the page always ends up last
    /// in the raw list.
    pub fn replace_page(&mut self, page: PageRef) {
        self.remove_page(&page);
        self.add_page(page);
    }
}
