//! Error types for the catalog layer.

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur in the catalog layer.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Record store error.
    #[error("store error: {0}")]
    Store(#[from] cellar_core::CoreError),

    /// Remote catalog request failed.
    #[error("remote catalog error: {0}")]
    Remote(#[from] reqwest::Error),

    /// A feed page size must be at least 1.
    #[error("page size must be >= 1")]
    InvalidPageSize,
}
