//! Ordered page sequence.

use std::ops::Deref;
use std::sync::Arc;

use crate::page::{PageKind, PageRef};

/// Ordered sequence of shared pages.
///
/// Dereferences to `[PageRef]`, so slice methods (`len`, `iter`, `first`, ...)
/// are available directly. All lookups scan in order and report the first hit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pages(Vec<PageRef>);

impl Pages {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Position of the first page whose source file path equals `path`.
    #[must_use]
    pub fn find_pos_by_file_path(&self, path: &str) -> Option<usize> {
        self.0.iter().position(|p| p.file_path == path)
    }

    /// Position of `page`, matched by identity or by its source file path.
    #[must_use]
    pub fn find_pos(&self, page: &PageRef) -> Option<usize> {
        self.0
            .iter()
            .position(|p| Arc::ptr_eq(p, page) || p.file_path == page.file_path)
    }

    /// Pages of exactly `kind`, in order.
    #[must_use]
    pub fn by_kind(&self, kind: PageKind) -> Self {
        self.0.iter().filter(|p| p.kind == kind).cloned().collect()
    }

    /// Pages of any kind other than `kind`, in order.
    #[must_use]
    pub fn excluding_kind(&self, kind: PageKind) -> Self {
        self.0.iter().filter(|p| p.kind != kind).cloned().collect()
    }

    pub(crate) fn push(&mut self, page: PageRef) {
        self.0.push(page);
    }

    /// Remove the page at `pos`, shifting later pages down.
    pub(crate) fn remove(&mut self, pos: usize) -> PageRef {
        self.0.remove(pos)
    }
}

impl Deref for Pages {
    type Target = [PageRef];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<PageRef>> for Pages {
    fn from(pages: Vec<PageRef>) -> Self {
        Self(pages)
    }
}

impl FromIterator<PageRef> for Pages {
    fn from_iter<I: IntoIterator<Item = PageRef>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Pages {
    type Item = PageRef;
    type IntoIter = std::vec::IntoIter<PageRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pages {
    type Item = &'a PageRef;
    type IntoIter = std::slice::Iter<'a, PageRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
