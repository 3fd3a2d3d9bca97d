//! Page-merging browse feed.

use crate::error::{CatalogError, CatalogResult};
use crate::source::PageSource;
use tracing::debug;

/// Page size the browser uses unless told otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A growing view over a paginated source.
///
/// The feed issues successive page fetches against its source and merges
/// each page onto the end of an in-memory view - the "load more" pattern:
/// the caller shows [`records`](Self::records), and calls
/// [`load_more`](Self::load_more) whenever the user asks for the next page.
///
/// Whether another load is worthwhile depends on what the source reports:
/// with a known total the feed compares against it; without one, a full
/// page means more may exist and a short or empty page means the source is
/// exhausted.
///
/// # Example
///
/// ```
/// use cellar_catalog::{BrowseFeed, CellarSource};
/// use cellar_codec::JsonCodec;
/// use cellar_core::RecordStore;
/// use cellar_storage::MemoryBackend;
/// use std::sync::Arc;
///
/// let store: RecordStore<u32, JsonCodec> =
///     RecordStore::new("numbers", Arc::new(MemoryBackend::new()), JsonCodec).unwrap();
/// store.store_records(&[1, 2, 3, 4, 5]).unwrap();
///
/// let mut feed = BrowseFeed::with_page_size(CellarSource::new(store), 2).unwrap();
/// feed.load_more().unwrap();
/// assert_eq!(feed.records(), &[1, 2]);
/// assert!(feed.has_more());
/// ```
pub struct BrowseFeed<S: PageSource> {
    source: S,
    page_size: usize,
    next_page: usize,
    records: Vec<S::Record>,
    total: Option<usize>,
    exhausted: bool,
}

impl<S: PageSource> BrowseFeed<S> {
    /// Creates a feed with the default page size.
    pub fn new(source: S) -> Self {
        Self {
            source,
            page_size: DEFAULT_PAGE_SIZE,
            next_page: 1,
            records: Vec::new(),
            total: None,
            exhausted: false,
        }
    }

    /// Creates a feed with a custom page size.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPageSize`] if `page_size` is zero.
    pub fn with_page_size(source: S, page_size: usize) -> CatalogResult<Self> {
        if page_size == 0 {
            return Err(CatalogError::InvalidPageSize);
        }
        Ok(Self {
            page_size,
            ..Self::new(source)
        })
    }

    /// Fetches the next page and merges it into the view.
    ///
    /// Returns the records added by this call. Loading past the end of the
    /// source adds nothing and is not an error.
    ///
    /// # Errors
    ///
    /// Propagates source errors; on error the view and the page cursor are
    /// unchanged, so the same page is retried on the next call.
    pub fn load_more(&mut self) -> CatalogResult<&[S::Record]> {
        let batch = self.source.fetch_page(self.next_page, self.page_size)?;

        self.next_page += 1;
        self.total = batch.total.or(self.total);
        self.exhausted = batch.records.len() < self.page_size;

        let added_from = self.records.len();
        self.records.extend(batch.records);

        debug!(
            page = self.next_page - 1,
            added = self.records.len() - added_from,
            loaded = self.records.len(),
            "feed page merged"
        );

        Ok(&self.records[added_from..])
    }

    /// The merged view, in source order.
    #[must_use]
    pub fn records(&self) -> &[S::Record] {
        &self.records
    }

    /// Number of records loaded so far.
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.records.len()
    }

    /// Full collection size, when the source has reported one.
    #[must_use]
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    /// Whether a further [`load_more`](Self::load_more) could add records.
    #[must_use]
    pub fn has_more(&self) -> bool {
        match self.total {
            Some(total) => self.records.len() < total,
            None => !self.exhausted,
        }
    }

    /// Clears the view and restarts from page 1.
    ///
    /// This is the tab-switch behavior: the next load starts the feed
    /// over against the same source.
    pub fn reset(&mut self) {
        self.next_page = 1;
        self.records.clear();
        self.total = None;
        self.exhausted = false;
    }
}

impl<S: PageSource> std::fmt::Debug for BrowseFeed<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowseFeed")
            .field("page_size", &self.page_size)
            .field("next_page", &self.next_page)
            .field("loaded", &self.records.len())
            .field("total", &self.total)
            .finish_non_exhaustive()
    }
}
