//! File-backed preference storage
//!
//! One JSON object per file. Every mutation rewrites the whole file through
//! a temporary sibling that is renamed into place, so a crash mid-write
//! leaves the previous contents intact.

use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::debug;

use super::store::KeyValueStore;
use crate::error::StorageError;

pub(crate) const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let values = match std::fs::read(&path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => {
                Map::new()
            }
            Ok(bytes) => match serde_json::from_slice::<Value>(&bytes) {
                Ok(Value::Object(map)) => map,
                Ok(_) | Err(_) => {
                    return Err(StorageError::CorruptedData(path));
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Map::new()
            }
            Err(source) => {
                return Err(StorageError::ReadFailed { path, source });
            }
        };
        debug!(path = %path.display(), keys = values.len(), "preferences opened");
        Ok(Self { path, values })
    }

    /// Open the store at the platform data directory.
    pub fn open_default() -> Result<Self, StorageError> {
        Self::open(Self::default_path()?)
    }

    /// `<data dir>/preferences.json` for this platform.
    pub fn default_path() -> Result<PathBuf, StorageError> {
        let dirs = ProjectDirs::from("", "marquee", "marquee").ok_or_else(
            || {
                StorageError::InitFailed(
                    "Unable to determine data directory".to_string(),
                )
            },
        )?;
        Ok(dirs.data_dir().join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let write_failed = |source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        std::fs::create_dir_all(&dir).map_err(write_failed)?;
        let bytes = serde_json::to_vec_pretty(&self.values)?;
        let mut tmp = NamedTempFile::new_in(&dir).map_err(write_failed)?;
        tmp.write_all(&bytes).map_err(write_failed)?;
        tmp.as_file().sync_all().map_err(write_failed)?;
        tmp.persist(&self.path).map_err(|e| write_failed(e.error))?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        let previous = self.values.insert(key.to_string(), value);
        if let Err(err) = self.persist() {
            match previous {
                Some(previous) => self.values.insert(key.to_string(), previous),
                None => self.values.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let Some(previous) = self.values.remove(key) else {
            return Ok(());
        };
        if let Err(err) = self.persist() {
            self.values.insert(key.to_string(), previous);
            return Err(err);
        }
        Ok(())
    }
}
