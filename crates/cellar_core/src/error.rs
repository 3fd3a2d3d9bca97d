//! Error types for cellar core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in cellar core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] cellar_storage::StorageError),

    /// Codec error.
    ///
    /// Raised when a key holds a value that cannot be decoded. An absent
    /// key is not an error - it reads as an empty collection.
    #[error("codec error: {0}")]
    Codec(#[from] cellar_codec::CodecError),

    /// A store key must be a non-empty string.
    #[error("store key must not be empty")]
    EmptyKey,

    /// Page numbers and page sizes start at 1.
    #[error("invalid page request: page {page}, page size {page_size} (both must be >= 1)")]
    InvalidPageRequest {
        /// The requested page number.
        page: usize,
        /// The requested page size.
        page_size: usize,
    },

    /// A key was re-opened with a different record type.
    ///
    /// Each key names one logical collection of one record type; opening
    /// it under another type would alias two collections onto the same
    /// persisted data.
    #[error("store '{key}' holds {stored} records, requested {requested}")]
    TypeMismatch {
        /// The store key.
        key: String,
        /// Type name recorded when the store was first opened.
        stored: &'static str,
        /// Type name of this open request.
        requested: &'static str,
    },
}
