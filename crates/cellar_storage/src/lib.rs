//! # Cellar Storage
//!
//! Storage backend trait and implementations for cellar.
//!
//! This crate provides the lowest-level persistence abstraction for cellar.
//! Backends are **string-keyed text stores** - they do not interpret the
//! values they hold.
//!
//! ## Design Principles
//!
//! - Backends map a string key to a single text value (read, write, remove)
//! - No knowledge of record shapes or the serialized format
//! - Must be `Send + Sync` so one backend can serve many stores
//! - Single-key reads and writes are atomic from one logical process
//!
//! ## Available Backends
//!
//! - [`MemoryBackend`] - For testing and ephemeral collections
//! - [`DirBackend`] - One file per key inside a locked directory
//!
//! ## Example
//!
//! ```rust
//! use cellar_storage::{KeyValueBackend, MemoryBackend};
//!
//! let backend = MemoryBackend::new();
//! backend.write("beers", "[]").unwrap();
//! assert_eq!(backend.read("beers").unwrap().as_deref(), Some("[]"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod dir;
mod error;
mod memory;

pub use backend::KeyValueBackend;
pub use dir::DirBackend;
pub use error::{StorageError, StorageResult};
pub use memory::MemoryBackend;
