//! Page source seam and the store-backed implementation.

use crate::error::CatalogResult;
use cellar_codec::SequenceCodec;
use cellar_core::RecordStore;

/// One fetched page plus what is known about the collection size.
///
/// Sources backed by the record store know the full total; the remote
/// catalog does not report one, so `total` stays `None` there.
#[derive(Debug, Clone, PartialEq)]
pub struct PageBatch<T> {
    /// The records on this page, in collection order.
    pub records: Vec<T>,
    /// Full collection size, when the source knows it.
    pub total: Option<usize>,
}

/// A paginated source of catalog records.
///
/// Page numbers start at 1. A page past the end of the data yields an
/// empty batch, not an error - the feed uses that to detect exhaustion.
pub trait PageSource {
    /// The record type this source produces.
    type Record;

    /// Fetches one page of records.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store read or remote request
    /// fails.
    fn fetch_page(&self, page: usize, page_size: usize) -> CatalogResult<PageBatch<Self::Record>>;
}

/// A [`PageSource`] over a persisted record store.
///
/// This is the personal-list side of the browser: whatever collection the
/// store holds is served page by page with its exact total.
#[derive(Debug, Clone)]
pub struct CellarSource<T, C> {
    store: RecordStore<T, C>,
}

impl<T, C> CellarSource<T, C> {
    /// Wraps a record store as a page source.
    pub fn new(store: RecordStore<T, C>) -> Self {
        Self { store }
    }

    /// Returns the wrapped store.
    #[must_use]
    pub fn store(&self) -> &RecordStore<T, C> {
        &self.store
    }
}

impl<T, C> PageSource for CellarSource<T, C>
where
    C: SequenceCodec<T>,
{
    type Record = T;

    fn fetch_page(&self, page: usize, page_size: usize) -> CatalogResult<PageBatch<T>> {
        let result = self.store.paginated(page, page_size)?;
        Ok(PageBatch {
            records: result.records,
            total: Some(result.total_count),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellar_codec::JsonCodec;
    use cellar_storage::MemoryBackend;
    use std::sync::Arc;

    fn source_with(records: &[u32]) -> CellarSource<u32, JsonCodec> {
        let store: RecordStore<u32, JsonCodec> =
            RecordStore::new("numbers", Arc::new(MemoryBackend::new()), JsonCodec).unwrap();
        store.store_records(records).unwrap();
        CellarSource::new(store)
    }

    #[test]
    fn store_pages_carry_the_total() {
        let source = source_with(&[1, 2, 3, 4, 5]);

        let batch = source.fetch_page(1, 2).unwrap();
        assert_eq!(batch.records, vec![1, 2]);
        assert_eq!(batch.total, Some(5));
    }

    #[test]
    fn page_past_the_end_is_empty_with_total() {
        let source = source_with(&[1, 2, 3]);

        let batch = source.fetch_page(5, 2).unwrap();
        assert!(batch.records.is_empty());
        assert_eq!(batch.total, Some(3));
    }

    #[test]
    fn invalid_page_propagates_store_error() {
        let source = source_with(&[1]);
        assert!(source.fetch_page(0, 2).is_err());
    }
}
