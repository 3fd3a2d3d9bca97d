//! Directory-based storage backend for persistent collections.
//!
//! File system layout:
//!
//! ```text
//! <data_dir>/
//! ├─ LOCK              # Advisory lock for single-writer access
//! ├─ beers.rec         # One file per key, percent-encoded key name
//! └─ tasting%20notes.rec
//! ```
//!
//! The LOCK file ensures only one process writes to the directory at a time.

use crate::backend::KeyValueBackend;
use crate::error::{StorageError, StorageResult};
use fs2::FileExt;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const LOCK_FILE: &str = "LOCK";
/// Extension for value files. Values are opaque text to this backend.
const VALUE_EXT: &str = "rec";

/// A directory-based storage backend.
///
/// Each key is stored as a single file inside the directory. Data survives
/// process restarts.
///
/// # Durability
///
/// Writes go to a temporary file which is synced and then renamed over the
/// value file, so a reader (or a crash) never observes a partial value.
/// After the rename the directory itself is fsynced.
///
/// # Locking
///
/// Opening the backend acquires an exclusive advisory lock on the directory.
/// A second open of the same directory fails with [`StorageError::Locked`]
/// until the first backend is dropped.
///
/// # Example
///
/// ```no_run
/// use cellar_storage::{KeyValueBackend, DirBackend};
/// use std::path::Path;
///
/// let backend = DirBackend::open(Path::new("cellar_data")).unwrap();
/// backend.write("beers", "[]").unwrap();
/// ```
#[derive(Debug)]
pub struct DirBackend {
    path: PathBuf,
    /// Lock file handle (held for exclusive access).
    _lock_file: File,
}

impl DirBackend {
    /// Opens or creates a storage directory.
    ///
    /// The directory is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path exists but is not a directory (`NotADirectory`)
    /// - Another process holds the lock (`Locked`)
    /// - I/O errors occur
    pub fn open(path: &Path) -> StorageResult<Self> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        if !path.is_dir() {
            return Err(StorageError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        // Acquire exclusive lock (non-blocking)
        let lock_path = path.join(LOCK_FILE);
        let lock_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        if lock_file.try_lock_exclusive().is_err() {
            return Err(StorageError::Locked);
        }

        Ok(Self {
            path: path.to_path_buf(),
            _lock_file: lock_file,
        })
    }

    /// Returns the path to the storage directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file path that stores `key`.
    ///
    /// Keys are percent-encoded so arbitrary key strings map to safe
    /// file names.
    fn value_path(&self, key: &str) -> PathBuf {
        let encoded = utf8_percent_encode(key, NON_ALPHANUMERIC).to_string();
        self.path.join(format!("{encoded}.{VALUE_EXT}"))
    }

    /// Syncs the storage directory so renames and deletions are durable.
    #[cfg(unix)]
    fn sync_directory(&self) -> StorageResult<()> {
        let dir = File::open(&self.path)?;
        dir.sync_all()?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn sync_directory(&self) -> StorageResult<()> {
        // Windows NTFS journaling covers metadata durability; directory
        // fsync is not directly supported there.
        Ok(())
    }
}

impl KeyValueBackend for DirBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.value_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.value_path(key);
        let temp_path = path.with_extension("tmp");

        // Write to temp file, sync, then rename over the value file
        let mut file = File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, &path)?;
        self.sync_directory()?;

        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.value_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
            self.sync_directory()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn dir_open_creates_directory() {
        let temp = tempdir().unwrap();
        let data_path = temp.path().join("new_store");

        assert!(!data_path.exists());

        let backend = DirBackend::open(&data_path).unwrap();
        assert!(data_path.is_dir());
        assert_eq!(backend.path(), data_path);
    }

    #[test]
    fn dir_open_fails_on_file_path() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("not_a_dir");
        fs::write(&file_path, "x").unwrap();

        let result = DirBackend::open(&file_path);
        assert!(matches!(result, Err(StorageError::NotADirectory { .. })));
    }

    #[test]
    fn dir_lock_prevents_second_open() {
        let temp = tempdir().unwrap();
        let data_path = temp.path().join("locked");

        let _first = DirBackend::open(&data_path).unwrap();

        let result = DirBackend::open(&data_path);
        assert!(matches!(result, Err(StorageError::Locked)));
    }

    #[test]
    fn dir_lock_released_on_drop() {
        let temp = tempdir().unwrap();
        let data_path = temp.path().join("reopen");

        {
            let _backend = DirBackend::open(&data_path).unwrap();
        }

        let _second = DirBackend::open(&data_path).unwrap();
    }

    #[test]
    fn dir_read_absent_key() {
        let temp = tempdir().unwrap();
        let backend = DirBackend::open(temp.path()).unwrap();

        assert_eq!(backend.read("never-written").unwrap(), None);
    }

    #[test]
    fn dir_write_then_read() {
        let temp = tempdir().unwrap();
        let backend = DirBackend::open(temp.path()).unwrap();

        backend.write("beers", "[1,2,3]").unwrap();
        assert_eq!(backend.read("beers").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn dir_write_replaces_whole_value() {
        let temp = tempdir().unwrap();
        let backend = DirBackend::open(temp.path()).unwrap();

        backend.write("beers", "a much longer first value").unwrap();
        backend.write("beers", "short").unwrap();
        assert_eq!(backend.read("beers").unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn dir_values_survive_reopen() {
        let temp = tempdir().unwrap();
        let data_path = temp.path().join("persist");

        {
            let backend = DirBackend::open(&data_path).unwrap();
            backend.write("beers", "persistent").unwrap();
        }

        let backend = DirBackend::open(&data_path).unwrap();
        assert_eq!(backend.read("beers").unwrap().as_deref(), Some("persistent"));
    }

    #[test]
    fn dir_remove_existing() {
        let temp = tempdir().unwrap();
        let backend = DirBackend::open(temp.path()).unwrap();

        backend.write("beers", "x").unwrap();
        backend.remove("beers").unwrap();
        assert_eq!(backend.read("beers").unwrap(), None);
    }

    #[test]
    fn dir_remove_absent_is_noop() {
        let temp = tempdir().unwrap();
        let backend = DirBackend::open(temp.path()).unwrap();

        assert!(backend.remove("never-written").is_ok());
    }

    #[test]
    fn dir_keys_with_unsafe_characters() {
        let temp = tempdir().unwrap();
        let backend = DirBackend::open(temp.path()).unwrap();

        backend.write("tasting notes/2024", "ipa").unwrap();
        assert_eq!(
            backend.read("tasting notes/2024").unwrap().as_deref(),
            Some("ipa")
        );
        // The raw key must not have produced a nested path
        assert!(!temp.path().join("tasting notes").exists());
    }

    #[test]
    fn dir_distinct_keys_distinct_files() {
        let temp = tempdir().unwrap();
        let backend = DirBackend::open(temp.path()).unwrap();

        backend.write("a", "1").unwrap();
        backend.write("b", "2").unwrap();
        assert_eq!(backend.read("a").unwrap().as_deref(), Some("1"));
        assert_eq!(backend.read("b").unwrap().as_deref(), Some("2"));
    }
}
