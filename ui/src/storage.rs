//! Key-value persistence for UI preferences.
//!
//! In the browser this is `window.localStorage`. Other targets (and tests)
//! get an in-memory map that lives as long as the state owning it.

use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write `{key}` to local storage")]
    Write { key: String },
}

/// A minimal synchronous string store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{KeyValueStore, StorageError};
    use web_sys::Storage;

    /// `window.localStorage`, looked up on every access.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserStorage;

    impl BrowserStorage {
        fn local_storage() -> Result<Storage, StorageError> {
            web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> Option<String> {
            Self::local_storage().ok()?.get_item(key).ok()?
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            Self::local_storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Write {
                    key: key.to_string(),
                })
        }
    }
}

/// Returns the durable store for the current platform.
pub fn platform_storage() -> Box<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(BrowserStorage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(MemoryStorage::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_overwrites() {
        let mut storage = MemoryStorage::with_entry("app-theme", "dark");
        assert_eq!(storage.get("app-theme").as_deref(), Some("dark"));
        storage.set("app-theme", "light").unwrap();
        assert_eq!(storage.get("app-theme").as_deref(), Some("light"));
        assert_eq!(storage.get("missing"), None);
    }
}
