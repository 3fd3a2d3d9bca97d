//! Error types for storage operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Another process holds the storage directory lock.
    #[error("storage directory locked: another process has exclusive access")]
    Locked,

    /// The storage path exists but is not a directory.
    #[error("path is not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },
}
