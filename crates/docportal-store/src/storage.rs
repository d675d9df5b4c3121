//! Key-value storage backends.
//!
//! A [`KeyValueStorage`] maps string keys to string values, the same shape
//! as browser local storage. [`FileStorage`] keeps one file per key under a
//! data directory; [`MemoryStorage`] keeps values in a map for the life of
//! the process.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use docportal_core::{Error, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// String key-value storage.
pub trait KeyValueStorage {
    /// Stored value for `key`, or `None` when nothing has been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("invalid storage key: {key:?}")))
    }
}

// =============================================================================
// FILE STORAGE
// =============================================================================

/// Filesystem storage backend.
///
/// Path format: `{base_path}/{key}.json`. Writes go to a temp file that is
/// renamed over the target, so a crash never leaves a half-written value.
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `base_path`. The directory is created
    /// on first write.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn full_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let full_path = self.full_path(key);
        match fs::read_to_string(&full_path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                warn!(
                    subsystem = "store",
                    component = "file_storage",
                    storage_path = %full_path.display(),
                    error = %e,
                    "file_storage: read failed"
                );
                Err(e.into())
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        let full_path = self.full_path(key);
        debug!(
            subsystem = "store",
            component = "file_storage",
            storage_key = key,
            storage_path = %full_path.display(),
            size = value.len(),
            "file_storage: write"
        );

        fs::create_dir_all(&self.base_path).map_err(|e| {
            warn!(parent = %self.base_path.display(), error = %e, "file_storage: create_dir_all failed");
            e
        })?;

        // Atomic write: temp file + rename
        let temp_path = full_path.with_extension("tmp");
        let result = write_temp(&temp_path, value.as_bytes()).and_then(|()| {
            fs::rename(&temp_path, &full_path).map_err(|e| {
                warn!(from = %temp_path.display(), to = %full_path.display(), error = %e, "file_storage: rename failed");
                e
            })
        });

        if let Err(e) = result {
            let _ = fs::remove_file(&temp_path); // Best-effort cleanup
            return Err(e.into());
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        match fs::remove_file(self.full_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn write_temp(temp_path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(temp_path).map_err(|e| {
        warn!(temp_path = %temp_path.display(), error = %e, "file_storage: File::create failed");
        e
    })?;
    file.write_all(data).map_err(|e| {
        warn!(error = %e, "file_storage: write_all failed");
        e
    })?;
    file.sync_all()
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// In-process storage. Values are lost when the value is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Read and decode the JSON value under `key`.
///
/// Missing keys, unreadable storage and corrupt JSON all yield
/// `T::default()`; the latter two are logged at WARN.
pub fn load_json<T, S>(storage: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStorage + ?Sized,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!(
                subsystem = "store",
                storage_key = key,
                error = %e,
                "Storage read failed, starting empty"
            );
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(
                subsystem = "store",
                storage_key = key,
                error = %e,
                "Corrupt stored value, starting empty"
            );
            T::default()
        }
    }
}
