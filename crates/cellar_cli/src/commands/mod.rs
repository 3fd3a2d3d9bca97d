//! CLI command implementations.

pub mod add;
pub mod browse;
pub mod list;

use cellar_catalog::CellarBeer;
use cellar_codec::JsonCodec;
use cellar_core::{RecordStore, StoreRegistry};
use cellar_storage::DirBackend;
use std::path::Path;
use std::sync::Arc;

/// Store key naming the personal cellar collection.
pub const CELLAR_KEY: &str = "beers";

/// Opens the personal cellar store inside `data_dir`.
pub fn open_cellar(
    data_dir: &Path,
) -> Result<RecordStore<CellarBeer, JsonCodec>, Box<dyn std::error::Error>> {
    let backend = Arc::new(DirBackend::open(data_dir)?);
    let registry = StoreRegistry::new(backend, JsonCodec);
    Ok(registry.open::<CellarBeer>(CELLAR_KEY)?)
}
