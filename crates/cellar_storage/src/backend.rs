//! Storage backend trait definition.

use crate::error::StorageResult;

/// A low-level storage backend for cellar.
///
/// Storage backends are **string-keyed text stores**. They provide simple
/// operations for reading, writing, and removing whole values. Cellar owns
/// all value interpretation - backends do not understand records, pages, or
/// the serialized format.
///
/// # Invariants
///
/// - `read` returns exactly the value previously written under that key,
///   or `None` if the key was never written (absence is not an error)
/// - `write` replaces the whole value; after it returns, the value is durable
/// - `write` is all-or-nothing: a reader never observes a partial value
/// - Backends must be `Send + Sync` for shared access across stores
///
/// # Implementors
///
/// - [`super::MemoryBackend`] - For testing
/// - [`super::DirBackend`] - For persistent storage
pub trait KeyValueBackend: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` if the key has never been written or was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// After this returns successfully, the value is durable and a
    /// subsequent `read` observes it in full.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes the value stored under `key`.
    ///
    /// Removing an absent key is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn remove(&self, key: &str) -> StorageResult<()>;
}
