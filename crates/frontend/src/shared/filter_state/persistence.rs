//! Key-value persistence of view filter state.
//!
//! Stores receive the adapter explicitly; the browser build injects
//! [`LocalStorage`], tests use [`MemoryStorage`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

use super::schema::ViewKind;
use super::store::ViewFilterState;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to write key {key}: {message}")]
    Write { key: String, message: String },
    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-process storage, lost on reload
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// `<userId>:<view-name>-view`
pub fn storage_key(user_id: &str, view: ViewKind) -> String {
    format!("{}:{}-view", user_id, view.name())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedState {
    version: u32,
    state: ViewFilterState,
}

/// Load state written with the same schema version; anything else is dropped
pub fn load_state(storage: &dyn KeyValueStorage, key: &str, version: u32) -> Option<ViewFilterState> {
    let raw = storage.get_item(key)?;
    match serde_json::from_str::<PersistedState>(&raw) {
        Ok(persisted) if persisted.version == version => Some(persisted.state),
        Ok(persisted) => {
            log::info!(
                "Discarding persisted state {} (version {} != {})",
                key,
                persisted.version,
                version
            );
            storage.remove_item(key);
            None
        }
        Err(e) => {
            log::warn!("Discarding unreadable persisted state {}: {}", key, e);
            storage.remove_item(key);
            None
        }
    }
}

pub fn save_state(
    storage: &dyn KeyValueStorage,
    key: &str,
    version: u32,
    state: &ViewFilterState,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(&PersistedState {
        version,
        state: state.clone(),
    })?;
    storage.set_item(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_format() {
        assert_eq!(storage_key("u-17", ViewKind::YardCheck), "u-17:yard-check-view");
        assert_eq!(storage_key("u-17", ViewKind::AccruedDistance), "u-17:accrued-distance-view");
    }

    #[test]
    fn test_version_mismatch_discards() {
        let storage = MemoryStorage::new();
        let state = ViewFilterState::default();
        save_state(&storage, "k", 1, &state).unwrap();
        assert!(load_state(&storage, "k", 1).is_some());
        assert!(load_state(&storage, "k", 2).is_none());
        // the stale document is removed
        assert!(storage.get_item("k").is_none());
    }

    #[test]
    fn test_garbage_discards() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "{not json").unwrap();
        assert!(load_state(&storage, "k", 1).is_none());
        assert!(storage.get_item("k").is_none());
    }
}
