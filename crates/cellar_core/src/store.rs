//! The paginated record store.

use crate::error::{CoreError, CoreResult};
use crate::page::Page;
use cellar_codec::SequenceCodec;
use cellar_storage::KeyValueBackend;
use parking_lot::Mutex;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, trace};

/// An ordered, durably persisted collection of records under a string key.
///
/// `RecordStore<T>` serves page-sliced reads with a total count and appends
/// records at the end of the sequence. Insertion order is significant and
/// survives process restarts. The store is generic over its record type and
/// takes serialization as an injected codec, so it never interprets record
/// shape itself.
///
/// Handles are cheap to clone; all clones for a key share the same
/// underlying state. Obtain handles through
/// [`StoreRegistry`](crate::StoreRegistry) so each key maps to exactly one
/// logical store per process.
///
/// # Writes
///
/// `add_record` and `store_records` are read-modify-write over the whole
/// persisted sequence. A per-store mutex serializes writers within the
/// process; the write is durable in the backend before either call returns.
///
/// # Example
///
/// ```
/// use cellar_core::RecordStore;
/// use cellar_codec::JsonCodec;
/// use cellar_storage::MemoryBackend;
/// use std::sync::Arc;
///
/// let store: RecordStore<u32, JsonCodec> =
///     RecordStore::new("numbers", Arc::new(MemoryBackend::new()), JsonCodec).unwrap();
///
/// store.store_records(&[1, 2, 3, 4, 5]).unwrap();
/// let page = store.paginated(2, 2).unwrap();
/// assert_eq!(page.records, vec![3, 4]);
/// assert_eq!(page.total_count, 5);
/// ```
pub struct RecordStore<T, C> {
    inner: Arc<StoreInner<C>>,
    _marker: PhantomData<fn() -> T>,
}

struct StoreInner<C> {
    key: String,
    backend: Arc<dyn KeyValueBackend>,
    codec: C,
    /// Serializes read-modify-write appends for this key.
    write_lock: Mutex<()>,
}

impl<T, C> Clone for RecordStore<T, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _marker: PhantomData,
        }
    }
}

impl<T, C> RecordStore<T, C> {
    /// Creates a store for `key` over the given backend and codec.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyKey`] if `key` is empty.
    pub fn new(key: &str, backend: Arc<dyn KeyValueBackend>, codec: C) -> CoreResult<Self> {
        if key.is_empty() {
            return Err(CoreError::EmptyKey);
        }

        Ok(Self {
            inner: Arc::new(StoreInner {
                key: key.to_string(),
                backend,
                codec,
                write_lock: Mutex::new(()),
            }),
            _marker: PhantomData,
        })
    }

    /// Returns the key naming this collection.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.inner.key
    }

    /// Returns `true` if `other` observes the same underlying store state.
    #[must_use]
    pub fn shares_state_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T, C> RecordStore<T, C>
where
    C: SequenceCodec<T>,
{
    /// Returns the full persisted sequence in insertion order.
    ///
    /// A key that has never been written reads as an empty sequence - that
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns a codec error if the key holds a value that cannot be
    /// decoded (corrupt data is distinct from absent data), or a storage
    /// error if the backend read fails.
    pub fn records(&self) -> CoreResult<Vec<T>> {
        match self.inner.backend.read(&self.inner.key)? {
            Some(text) => Ok(self.inner.codec.decode(&text)?),
            None => Ok(Vec::new()),
        }
    }

    /// Returns the number of persisted records.
    ///
    /// # Errors
    ///
    /// Same failure cases as [`records`](Self::records).
    pub fn count(&self) -> CoreResult<usize> {
        Ok(self.records()?.len())
    }

    /// Replaces the entire persisted sequence with `records`.
    ///
    /// The write is all-or-nothing and durable before this returns.
    ///
    /// # Errors
    ///
    /// Returns a codec error if a record cannot be encoded, or a storage
    /// error if the backend write fails. On error nothing is written.
    pub fn store_records(&self, records: &[T]) -> CoreResult<()> {
        let _guard = self.inner.write_lock.lock();
        self.write_locked(records)
    }

    /// Appends `record` to the end of the persisted sequence.
    ///
    /// Duplicates are allowed; no uniqueness constraint applies. After this
    /// returns, [`records`](Self::records) ends with the new record and the
    /// write is durable.
    ///
    /// # Errors
    ///
    /// Returns a codec error if the existing value cannot be decoded or the
    /// new sequence cannot be encoded, or a storage error from the backend.
    pub fn add_record(&self, record: T) -> CoreResult<()> {
        let _guard = self.inner.write_lock.lock();
        let mut records = self.records()?;
        records.push(record);
        self.write_locked(&records)?;
        debug!(key = %self.inner.key, total = records.len(), "record appended");
        Ok(())
    }

    /// Returns one page of records together with the full collection size.
    ///
    /// The page starts at `(page - 1) * page_size` and holds at most
    /// `page_size` records, clipped to the available length. A page number
    /// past the end of the data yields empty `records` and the correct
    /// `total_count` - that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPageRequest`] if `page` or `page_size`
    /// is zero, plus the failure cases of [`records`](Self::records).
    pub fn paginated(&self, page: usize, page_size: usize) -> CoreResult<Page<T>> {
        if page == 0 || page_size == 0 {
            return Err(CoreError::InvalidPageRequest { page, page_size });
        }

        let mut records = self.records()?;
        let total_count = records.len();

        let start = (page - 1).saturating_mul(page_size);
        let page_records = if start >= total_count {
            Vec::new()
        } else {
            let end = start.saturating_add(page_size).min(total_count);
            records.drain(start..end).collect()
        };

        trace!(
            key = %self.inner.key,
            page,
            page_size,
            returned = page_records.len(),
            total_count,
            "paginated read"
        );

        Ok(Page {
            records: page_records,
            total_count,
        })
    }

    fn write_locked(&self, records: &[T]) -> CoreResult<()> {
        let text = self.inner.codec.encode(records)?;
        self.inner.backend.write(&self.inner.key, &text)?;
        Ok(())
    }
}

impl<T, C> std::fmt::Debug for RecordStore<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("key", &self.inner.key)
            .finish_non_exhaustive()
    }
}
