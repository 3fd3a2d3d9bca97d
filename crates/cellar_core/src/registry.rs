//! Per-key store registry.

use crate::error::{CoreError, CoreResult};
use crate::store::RecordStore;
use cellar_storage::KeyValueBackend;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// One store per key, shared by every caller in the process.
///
/// The registry maps each key to exactly one logical store, created lazily
/// on the first [`open`](Self::open) for that key and living until explicit
/// teardown ([`evict`](Self::evict) or [`purge`](Self::purge)). Calling
/// `open` with the same key from anywhere in the process returns a handle
/// backed by the same underlying state; different keys are fully
/// independent.
///
/// Each key also records the record type it was first opened with.
/// Re-opening a key as a different type is an error rather than a silent
/// aliasing of two collections onto one persisted value.
///
/// # Example
///
/// ```
/// use cellar_core::StoreRegistry;
/// use cellar_codec::JsonCodec;
/// use cellar_storage::MemoryBackend;
/// use std::sync::Arc;
///
/// let registry = StoreRegistry::new(Arc::new(MemoryBackend::new()), JsonCodec);
///
/// let a = registry.open::<u32>("numbers").unwrap();
/// let b = registry.open::<u32>("numbers").unwrap();
///
/// a.add_record(7).unwrap();
/// assert_eq!(b.records().unwrap(), vec![7]);
/// ```
pub struct StoreRegistry<C> {
    backend: Arc<dyn KeyValueBackend>,
    codec: C,
    entries: RwLock<HashMap<String, RegistryEntry>>,
}

struct RegistryEntry {
    type_id: TypeId,
    type_name: &'static str,
    /// A `RecordStore<T, C>` handle, type-erased so one map can hold
    /// stores of different record types.
    handle: Box<dyn Any + Send + Sync>,
}

impl<C> StoreRegistry<C>
where
    C: Clone + Send + Sync + 'static,
{
    /// Creates a registry over the given backend and codec.
    ///
    /// Every store opened through this registry shares the backend; the
    /// codec is cloned into each store.
    pub fn new(backend: Arc<dyn KeyValueBackend>, codec: C) -> Self {
        Self {
            backend,
            codec,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the store for `key`, creating it on first access.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyKey`] if `key` is empty, or
    /// [`CoreError::TypeMismatch`] if `key` was first opened with a
    /// different record type.
    pub fn open<T>(&self, key: &str) -> CoreResult<RecordStore<T, C>>
    where
        T: Send + Sync + 'static,
    {
        if key.is_empty() {
            return Err(CoreError::EmptyKey);
        }

        // Fast path: the entry already exists
        {
            let entries = self.entries.read();
            if let Some(entry) = entries.get(key) {
                return entry.typed::<T, C>(key);
            }
        }

        let mut entries = self.entries.write();
        // Another caller may have created the entry while we upgraded
        if let Some(entry) = entries.get(key) {
            return entry.typed::<T, C>(key);
        }

        let store: RecordStore<T, C> =
            RecordStore::new(key, Arc::clone(&self.backend), self.codec.clone())?;
        entries.insert(
            key.to_string(),
            RegistryEntry {
                type_id: TypeId::of::<T>(),
                type_name: std::any::type_name::<T>(),
                handle: Box::new(store.clone()),
            },
        );
        debug!(key, record_type = std::any::type_name::<T>(), "store created");

        Ok(store)
    }

    /// Drops the registry entry for `key`, leaving persisted data intact.
    ///
    /// The next `open` for the key creates a fresh entry over the same
    /// persisted state. Returns `true` if an entry existed.
    pub fn evict(&self, key: &str) -> bool {
        let removed = self.entries.write().remove(key).is_some();
        if removed {
            debug!(key, "store evicted");
        }
        removed
    }

    /// Drops the registry entry for `key` and removes its persisted data.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend removal fails; the entry is
    /// dropped regardless.
    pub fn purge(&self, key: &str) -> CoreResult<()> {
        self.entries.write().remove(key);
        self.backend.remove(key)?;
        debug!(key, "store purged");
        Ok(())
    }

    /// Returns `true` if an entry for `key` currently exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Returns the number of live registry entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if no stores have been opened yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl RegistryEntry {
    fn typed<T, C>(&self, key: &str) -> CoreResult<RecordStore<T, C>>
    where
        T: Send + Sync + 'static,
        C: Clone + Send + Sync + 'static,
    {
        if self.type_id != TypeId::of::<T>() {
            return Err(CoreError::TypeMismatch {
                key: key.to_string(),
                stored: self.type_name,
                requested: std::any::type_name::<T>(),
            });
        }

        let store = self
            .handle
            .downcast_ref::<RecordStore<T, C>>()
            .ok_or_else(|| CoreError::TypeMismatch {
                key: key.to_string(),
                stored: self.type_name,
                requested: std::any::type_name::<T>(),
            })?;
        Ok(store.clone())
    }
}

impl<C> std::fmt::Debug for StoreRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreRegistry")
            .field("stores", &self.entries.read().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellar_codec::JsonCodec;
    use cellar_storage::MemoryBackend;

    fn registry() -> StoreRegistry<JsonCodec> {
        StoreRegistry::new(Arc::new(MemoryBackend::new()), JsonCodec)
    }

    #[test]
    fn same_key_observes_same_state() {
        let registry = registry();

        let first = registry.open::<u32>("numbers").unwrap();
        let second = registry.open::<u32>("numbers").unwrap();

        first.add_record(1).unwrap();
        assert_eq!(second.records().unwrap(), vec![1]);
        assert!(first.shares_state_with(&second));
    }

    #[test]
    fn different_keys_are_independent() {
        let registry = registry();

        let ales = registry.open::<u32>("ales").unwrap();
        let stouts = registry.open::<u32>("stouts").unwrap();

        ales.add_record(1).unwrap();
        stouts.add_record(2).unwrap();

        assert_eq!(ales.records().unwrap(), vec![1]);
        assert_eq!(stouts.records().unwrap(), vec![2]);
    }

    #[test]
    fn empty_key_is_rejected() {
        let registry = registry();
        assert!(matches!(
            registry.open::<u32>(""),
            Err(CoreError::EmptyKey)
        ));
    }

    #[test]
    fn reopening_as_different_type_fails() {
        let registry = registry();

        let _numbers = registry.open::<u32>("numbers").unwrap();
        let result = registry.open::<String>("numbers");

        assert!(matches!(result, Err(CoreError::TypeMismatch { .. })));
    }

    #[test]
    fn evict_keeps_persisted_data() {
        let registry = registry();

        let store = registry.open::<u32>("numbers").unwrap();
        store.add_record(42).unwrap();

        assert!(registry.evict("numbers"));
        assert!(!registry.contains("numbers"));

        // Fresh entry over the same persisted state
        let reopened = registry.open::<u32>("numbers").unwrap();
        assert_eq!(reopened.records().unwrap(), vec![42]);
    }

    #[test]
    fn evict_allows_type_change() {
        let registry = registry();

        let _numbers = registry.open::<u32>("beers").unwrap();
        registry.evict("beers");

        // The old entry is gone, so the key can be claimed by another type
        assert!(registry.open::<String>("beers").is_ok());
    }

    #[test]
    fn purge_removes_persisted_data() {
        let registry = registry();

        let store = registry.open::<u32>("numbers").unwrap();
        store.add_record(42).unwrap();

        registry.purge("numbers").unwrap();

        let reopened = registry.open::<u32>("numbers").unwrap();
        assert_eq!(reopened.records().unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn len_tracks_open_keys() {
        let registry = registry();
        assert!(registry.is_empty());

        registry.open::<u32>("a").unwrap();
        registry.open::<u32>("b").unwrap();
        registry.open::<u32>("a").unwrap();

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn concurrent_opens_converge_on_one_entry() {
        let registry = Arc::new(registry());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.open::<u32>("numbers").unwrap())
            })
            .collect();

        let stores: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(registry.len(), 1);
        for store in &stores[1..] {
            assert!(store.shares_state_with(&stores[0]));
        }
    }
}
