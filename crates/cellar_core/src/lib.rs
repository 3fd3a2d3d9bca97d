//! # Cellar Core
//!
//! The paginated record store at the heart of cellar.
//!
//! This crate provides:
//! - [`RecordStore`] - an ordered, durably persisted record collection under
//!   a string key, with page-sliced reads
//! - [`Page`] - a read-only snapshot of one page plus the full collection size
//! - [`StoreRegistry`] - one store per key, created lazily on first access
//!   and shared by every caller in the process
//!
//! Persistence and serialization are injected capabilities: the store works
//! against any [`cellar_storage::KeyValueBackend`] and any
//! [`cellar_codec::SequenceCodec`], so its append and pagination logic can be
//! tested without a real persistence medium.
//!
//! ## Example
//!
//! ```
//! use cellar_core::StoreRegistry;
//! use cellar_codec::JsonCodec;
//! use cellar_storage::MemoryBackend;
//! use std::sync::Arc;
//!
//! let registry = StoreRegistry::new(Arc::new(MemoryBackend::new()), JsonCodec);
//! let beers = registry.open::<String>("beers").unwrap();
//!
//! beers.add_record("Punk IPA".to_string()).unwrap();
//! beers.add_record("Elvis Juice".to_string()).unwrap();
//!
//! let page = beers.paginated(1, 10).unwrap();
//! assert_eq!(page.total_count, 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod page;
mod registry;
mod store;

pub use error::{CoreError, CoreResult};
pub use page::Page;
pub use registry::StoreRegistry;
pub use store::RecordStore;
