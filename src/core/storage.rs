//! Persistent key-value storage for saved courses and search history
//!
//! Values are JSON documents. Reads that fail or return corrupt data fall back
//! to an empty default instead of aborting the session.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Key holding the saved-course ids (JSON array of strings)
pub const SAVED_COURSES_KEY: &str = "saved_courses";

/// Key holding the search history (JSON array of strings)
pub const SEARCH_HISTORY_KEY: &str = "search_history";

/// Errors raised by a storage backend
#[derive(Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    Io {
        /// Key being accessed
        key: String,
        /// Underlying error
        source: std::io::Error,
    },
    /// The stored value is not valid JSON for the expected type
    Json {
        /// Key being accessed
        key: String,
        /// Underlying error
        source: serde_json::Error,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { key, source } => write!(f, "storage I/O error for '{key}': {source}"),
            Self::Json { key, source } => write!(f, "invalid stored data for '{key}': {source}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Raw string storage addressed by key
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if nothing was stored
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value, falling back to `T::default()` on any failure
pub fn load_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            crate::warn!("{e}; starting with an empty value");
            return T::default();
        }
    };
    serde_json::from_str(&raw).unwrap_or_else(|source| {
        let e = StorageError::Json {
            key: key.to_string(),
            source,
        };
        crate::warn!("{e}; starting with an empty value");
        T::default()
    })
}

/// Encode `value` as JSON and store it under `key`
///
/// # Errors
/// Returns an error if encoding or writing fails.
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Json {
        key: key.to_string(),
        source,
    })?;
    store.write(key, &raw)
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the files
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let io_err = |source: std::io::Error| StorageError::Io {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_err)?;
        fs::write(self.path_for(key), value).map_err(io_err)?;
        crate::debug!("wrote {}", self.path_for(key).display());
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_round_trip() {
        let mut store = MemoryStore::new();
        save_json(&mut store, "k", &["a", "b"]).unwrap();
        let back: Vec<String> = load_or_default(&store, "k");
        assert_eq!(back, ["a", "b"]);
    }

    #[test]
    fn test_missing_key_is_default() {
        let store = MemoryStore::new();
        let value: Vec<String> = load_or_default(&store, SAVED_COURSES_KEY);
        assert!(value.is_empty());
    }

    #[test]
    fn test_corrupt_value_is_default() {
        let mut store = MemoryStore::new();
        store.write(SEARCH_HISTORY_KEY, "{oops").unwrap();
        let value: Vec<String> = load_or_default(&store, SEARCH_HISTORY_KEY);
        assert!(value.is_empty());
    }

    #[test]
    fn test_file_store_creates_directory() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let mut store = FileStore::new(temp.path().join("nested").join("data"));

        assert!(store.read("k").unwrap().is_none());
        store.write("k", "[\"x\"]").unwrap();
        assert!(store.path_for("k").exists());
        assert_eq!(store.read("k").unwrap().as_deref(), Some("[\"x\"]"));
    }

    #[test]
    fn test_file_store_read_error_on_directory() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::new(temp.path());
        fs::create_dir_all(store.path_for("clash")).unwrap();
        assert!(matches!(
            store.read("clash"),
            Err(StorageError::Io { ref key, .. }) if key == "clash"
        ));
    }
}
