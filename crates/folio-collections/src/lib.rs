//! Page collection index for Folio site builds.
//!
//! This crate provides:
//! - [`Page`] / [`PageKind`]: the page metadata the index works with
//! - [`Pages`]: an ordered, shared page sequence
//! - [`PageCollections`]: raw, working-set and cached page views with typed
//!   lookups and raw-list mutation
//!
//! # Quick Start
//!
//! ```
//! use folio_collections::{Page, PageCollections, PageKind};
//! use folio_config::ContentConfig;
//!
//! let mut collections = PageCollections::new();
//! collections.add_page(Page::new(PageKind::Home, "_index.md").into_ref());
//! collections.add_page(
//!     Page::new(PageKind::Page, "blog/hello.md")
//!         .with_sections(["blog"])
//!         .into_ref(),
//! );
//!
//! collections.assemble(&ContentConfig::default());
//! collections.refresh_page_caches();
//!
//! assert_eq!(collections.regular_pages().len(), 1);
//! assert!(collections.get_page(PageKind::Home, &[]).is_some());
//! assert!(collections.get_page(PageKind::Page, &["blog"]).is_some());
//! ```

mod collections;
mod page;
mod pages;

pub use collections::{PageCollections, PageSource};
pub use page::{Page, PageKind, PageRef, ParsePageKindError};
pub use pages::Pages;
