//! Durable key-value storage for user selections.
//!
//! Values are opaque strings; callers decide the encoding. Reads never fail,
//! a missing or unreadable backing file behaves like an empty store.

use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "TradeRoutePlanner";
const APP_NAME: &str = "TradeRoutePlanner";
const STATE_FILENAME: &str = "state.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Whether writes outlive the process.
    fn is_durable(&self) -> bool {
        true
    }

    /// Writes several keys at once; a `None` value removes the key.
    ///
    /// Every change is attempted even if an earlier one fails, and the first
    /// error is returned.
    fn apply(&mut self, changes: &[(&str, Option<String>)]) -> Result<(), StoreError> {
        let mut first_error = None;
        for (key, value) in changes {
            let result = match value {
                Some(value) => self.set(key, value),
                None => self.remove(key),
            };
            if let Err(e) = result {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

/// Volatile store, used in tests and when no state directory exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }
}

/// Flat JSON object on disk, rewritten on every change.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = read_entries(&path).unwrap_or_default();
        Self { path, entries }
    }

    /// Opens `state.json` in `dir`, or in the per-user config directory.
    pub fn in_dir(dir: Option<&Path>) -> Result<Self, StoreError> {
        let dir = match dir {
            Some(dir) => dir.to_path_buf(),
            None => ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or(StoreError::StorageUnavailable)?,
        };
        Ok(Self::open(dir.join(STATE_FILENAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), keys = self.entries.len(), "saved state");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn apply(&mut self, changes: &[(&str, Option<String>)]) -> Result<(), StoreError> {
        let mut changed = false;
        for (key, value) in changes {
            let previous = match value {
                Some(value) => self.entries.insert(key.to_string(), value.clone()),
                None => self.entries.remove(*key),
            };
            changed |= previous.as_ref() != value.as_ref();
        }
        if changed {
            self.flush()?;
        }
        Ok(())
    }
}

fn read_entries(path: &Path) -> Option<BTreeMap<String, String>> {
    if !path.exists() {
        debug!(path = %path.display(), "no saved state");
        return None;
    }

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(entries) => {
                debug!(path = %path.display(), "loaded saved state");
                Some(entries)
            }
            Err(e) => {
                warn!("failed to parse saved state, starting fresh: {e}");
                None
            }
        },
        Err(e) => {
            warn!("failed to read saved state, starting fresh: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get("cargo"), None);
        store.set("cargo", "{}").unwrap();
        assert_eq!(store.get("cargo").as_deref(), Some("{}"));
        store.remove("cargo").unwrap();
        assert_eq!(store.get("cargo"), None);
        assert!(!store.is_durable());
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::in_dir(Some(dir.path())).unwrap();
        store.set("startCity", r#"{"id":"halcyon"}"#).unwrap();
        store.set("endCity", r#"{"id":"joeva"}"#).unwrap();
        store.remove("endCity").unwrap();

        let reopened = JsonFileStore::open(store.path());
        assert_eq!(reopened.get("startCity").as_deref(), Some(r#"{"id":"halcyon"}"#));
        assert_eq!(reopened.get("endCity"), None);
        assert!(reopened.is_durable());
    }

    #[test]
    fn file_store_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = JsonFileStore::in_dir(Some(nested.as_path())).unwrap();
        store.set("cargo", "{}").unwrap();
        assert!(nested.join(STATE_FILENAME).exists());
    }

    #[test]
    fn apply_writes_all_changes_in_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::in_dir(Some(dir.path())).unwrap();
        store.set("endCity", r#"{"id":"joeva"}"#).unwrap();

        store
            .apply(&[
                ("startCity", Some(r#"{"id":"halcyon"}"#.to_string())),
                ("endCity", None),
                ("cargo", Some("{}".to_string())),
            ])
            .unwrap();

        let reopened = JsonFileStore::open(store.path());
        assert_eq!(reopened.get("startCity").as_deref(), Some(r#"{"id":"halcyon"}"#));
        assert_eq!(reopened.get("endCity"), None);
        assert_eq!(reopened.get("cargo").as_deref(), Some("{}"));
    }

    #[test]
    fn unchanged_apply_does_not_touch_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::in_dir(Some(dir.path())).unwrap();
        store.apply(&[("endCity", None)]).unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATE_FILENAME);
        fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("startCity"), None);
    }
}
