//! Keyed string storage
//!
//! The game only needs get/set by string key with restart durability.
//! `FileStore` keeps one file per key on disk; `MemoryStore` is for tests and
//! throwaway play.

use rustc_hash::FxHashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Get/set-by-key persistent storage
pub trait KeyValueStore {
    /// Read the value for `key`, `Ok(None)` if never written
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the backing storage exists but cannot be read.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Overwrite the value for `key`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform data directory, e.g. `~/.local/share/chromacle`
    ///
    /// Falls back to `./.chromacle` when no data directory is known.
    #[must_use]
    pub fn default_dir() -> PathBuf {
        dirs::data_dir().map_or_else(|| PathBuf::from(".chromacle"), |d| d.join("chromacle"))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        // Write-then-rename keeps each value atomic
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &path)
    }
}

/// In-memory store, lost when dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        assert_eq!(store.get("chromacle-state").unwrap(), None);
    }

    #[test]
    fn file_store_creates_dir_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("data"));

        store.set("chromacle-stats", "{}").unwrap();
        store.set("chromacle-stats", r#"{"played":1}"#).unwrap();

        assert_eq!(
            store.get("chromacle-stats").unwrap().as_deref(),
            Some(r#"{"played":1}"#)
        );
        assert!(store.dir().join("chromacle-stats.json").exists());
        assert!(!store.dir().join("chromacle-stats.json.tmp").exists());
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::new(dir.path()).set("k", "durable").unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("durable"));
    }
}
