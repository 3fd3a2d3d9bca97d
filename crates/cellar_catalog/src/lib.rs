//! # Cellar Catalog
//!
//! The catalog layer on top of the record store: the record types, the
//! remote catalog client, and the page-merging browse feed.
//!
//! A catalog browser shows two lists side by side:
//! - the public catalog, fetched page-by-page from a remote API
//!   ([`RemoteCatalog`])
//! - the personal cellar, persisted locally through a
//!   [`cellar_core::RecordStore`] ([`CellarSource`])
//!
//! Both are driven through the same [`PageSource`] seam by a
//! [`BrowseFeed`], which merges successive pages into a growing view and
//! answers whether a further "load more" is worthwhile.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod beer;
mod error;
mod feed;
mod remote;
mod source;

pub use beer::{CatalogBeer, CellarBeer};
pub use error::{CatalogError, CatalogResult};
pub use feed::{BrowseFeed, DEFAULT_PAGE_SIZE};
pub use remote::{RemoteCatalog, DEFAULT_CATALOG_URL};
pub use source::{CellarSource, PageBatch, PageSource};
