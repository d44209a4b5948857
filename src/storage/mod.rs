// SPDX-License-Identifier: MPL-2.0
//! Key-value persistence, the counterpart of browser local storage.
//!
//! [`FileStore`] keeps every entry in a single CBOR map (`storage.cbor`) in
//! the application data directory. Unlike `settings.toml` it is not meant to
//! be edited by hand.
//!
//! # Path Resolution
//!
//! 1. Use [`FileStore::open_in`] with an explicit directory
//! 2. Set `VITRINE_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

pub mod preferences;

pub use preferences::{PreferenceStore, THEME_KEY};

use crate::app::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Storage file name within the app data directory.
const STORAGE_FILE: &str = "storage.cbor";

/// String key-value storage.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store, used by tests and when no data directory exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// CBOR-backed store that rewrites its file on every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store in the default data directory.
    pub fn open() -> Result<Self> {
        Self::open_in(None)
    }

    /// Opens the store in `base_dir`, or the resolved data directory.
    ///
    /// A missing file is an empty store; an unreadable one is an error.
    pub fn open_in(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = paths::get_app_data_dir_with_override(base_dir)
            .ok_or_else(|| Error::Storage("no data directory available".into()))?;
        path.push(STORAGE_FILE);
        Self::open_file(path)
    }

    fn open_file(path: PathBuf) -> Result<Self> {
        let entries = if path.exists() {
            let reader = BufReader::new(fs::File::open(&path)?);
            ciborium::from_reader(reader)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(fs::File::create(&self.path)?);
        ciborium::into_writer(&self.entries, writer)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(error) = self.flush() {
            // Keep memory and disk in agreement.
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(error);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_returns_none_for_unknown_keys() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn memory_store_overwrites_values() {
        let mut store = MemoryStore::new();
        store.set("theme", "light").unwrap();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempdir().expect("temp dir");
        let mut store = FileStore::open_in(Some(dir.path().to_path_buf())).expect("open");
        store.set("theme", "dark").expect("set");

        let reopened = FileStore::open_in(Some(dir.path().to_path_buf())).expect("reopen");
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert!(reopened.path().ends_with(STORAGE_FILE));
    }

    #[test]
    fn file_store_creates_missing_directories() {
        let dir = tempdir().expect("temp dir");
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::open_in(Some(nested.clone())).expect("open");
        store.set("theme", "light").expect("set");
        assert!(nested.join(STORAGE_FILE).exists());
    }

    #[test]
    fn corrupted_file_is_a_storage_error() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(STORAGE_FILE), b"\xff\xff not cbor").expect("write");

        let result = FileStore::open_in(Some(dir.path().to_path_buf()));
        assert!(matches!(result, Err(Error::Storage(_))));
    }
}
