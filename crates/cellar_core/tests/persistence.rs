//! Persistence tests that require a real file system.

use cellar_codec::JsonCodec;
use cellar_core::StoreRegistry;
use cellar_storage::{DirBackend, StorageError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Bottle {
    id: String,
    name: String,
}

fn bottle(id: &str, name: &str) -> Bottle {
    Bottle {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn records_survive_restart_in_order() {
    let temp = tempdir().unwrap();
    let data_path = temp.path().join("cellar");

    // First session: append records
    {
        let backend = Arc::new(DirBackend::open(&data_path).unwrap());
        let registry = StoreRegistry::new(backend, JsonCodec);
        let beers = registry.open::<Bottle>("beers").unwrap();

        beers.add_record(bottle("1", "Punk IPA")).unwrap();
        beers.add_record(bottle("2", "Elvis Juice")).unwrap();
        beers.add_record(bottle("3", "Jet Black Heart")).unwrap();
    }

    // Second session: order and content are intact
    {
        let backend = Arc::new(DirBackend::open(&data_path).unwrap());
        let registry = StoreRegistry::new(backend, JsonCodec);
        let beers = registry.open::<Bottle>("beers").unwrap();

        let records = beers.records().unwrap();
        assert_eq!(
            records,
            vec![
                bottle("1", "Punk IPA"),
                bottle("2", "Elvis Juice"),
                bottle("3", "Jet Black Heart"),
            ]
        );

        let page = beers.paginated(2, 2).unwrap();
        assert_eq!(page.records, vec![bottle("3", "Jet Black Heart")]);
        assert_eq!(page.total_count, 3);
    }
}

#[test]
fn distinct_keys_persist_independently() {
    let temp = tempdir().unwrap();
    let data_path = temp.path().join("cellar");

    {
        let backend = Arc::new(DirBackend::open(&data_path).unwrap());
        let registry = StoreRegistry::new(backend, JsonCodec);

        let ales = registry.open::<Bottle>("ales").unwrap();
        let stouts = registry.open::<Bottle>("stouts").unwrap();
        ales.add_record(bottle("1", "Dead Pony Club")).unwrap();
        stouts.add_record(bottle("2", "Jet Black Heart")).unwrap();
    }

    {
        let backend = Arc::new(DirBackend::open(&data_path).unwrap());
        let registry = StoreRegistry::new(backend, JsonCodec);

        let ales = registry.open::<Bottle>("ales").unwrap();
        let stouts = registry.open::<Bottle>("stouts").unwrap();
        assert_eq!(ales.records().unwrap(), vec![bottle("1", "Dead Pony Club")]);
        assert_eq!(
            stouts.records().unwrap(),
            vec![bottle("2", "Jet Black Heart")]
        );
    }
}

#[test]
fn second_process_is_locked_out() {
    let temp = tempdir().unwrap();
    let data_path = temp.path().join("cellar");

    let _first = DirBackend::open(&data_path).unwrap();
    let second = DirBackend::open(&data_path);

    assert!(matches!(second, Err(StorageError::Locked)));
}

#[test]
fn hand_corrupted_file_surfaces_as_codec_error() {
    let temp = tempdir().unwrap();
    let data_path = temp.path().join("cellar");

    {
        let backend = Arc::new(DirBackend::open(&data_path).unwrap());
        let registry = StoreRegistry::new(backend, JsonCodec);
        let beers = registry.open::<Bottle>("beers").unwrap();
        beers.add_record(bottle("1", "Punk IPA")).unwrap();
    }

    // Truncate the value file behind the store's back
    std::fs::write(data_path.join("beers.rec"), "[{\"id\":").unwrap();

    let backend = Arc::new(DirBackend::open(&data_path).unwrap());
    let registry = StoreRegistry::new(backend, JsonCodec);
    let beers = registry.open::<Bottle>("beers").unwrap();

    assert!(matches!(
        beers.records(),
        Err(cellar_core::CoreError::Codec(_))
    ));
}
