//! Key-value persistence
//!
//! The browser build stores everything in LocalStorage; tests and the
//! native build use [`MemoryStore`]. Values are JSON-encoded scalars or
//! small lists, one key per value.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage rejected write to `{key}`")]
    WriteRejected { key: String },

    #[error("could not encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value, `None` if missing or malformed
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding malformed value for `{key}`: {e}");
            None
        }
    }
}

/// Encode and write a JSON value
pub fn save_json<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// In-memory store for tests and native runs
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteRejected {
                key: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_values_round_trip_through_store() {
        let mut store = MemoryStore::default();
        save_json(&mut store, "inv", &vec![0u32, 3]).unwrap();
        assert_eq!(store.get("inv").as_deref(), Some("[0,3]"));
        assert_eq!(load_json::<Vec<u32>>(&store, "inv"), Some(vec![0, 3]));
    }

    #[test]
    fn malformed_or_missing_values_load_as_none() {
        let mut store = MemoryStore::default();
        assert_eq!(load_json::<u64>(&store, "missing"), None);
        store.set("coins", "lots").unwrap();
        assert_eq!(load_json::<u64>(&store, "coins"), None);
    }
}
