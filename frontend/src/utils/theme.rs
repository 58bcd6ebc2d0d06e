use thiserror::Error;
use web_sys::window;
use crate::config;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("Failed to write {0}")]
    Write(String),
}

/// Single-key string preferences. Backed by localStorage in the browser.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

pub fn load_theme(store: &impl PreferenceStore) -> String {
    store
        .get(config::THEME_STORAGE_KEY)
        .filter(|theme| !theme.is_empty())
        .unwrap_or_else(|| config::DEFAULT_THEME.to_string())
}

pub fn save_theme(store: &impl PreferenceStore, theme: &str) -> Result<(), StorageError> {
    store.set(config::THEME_STORAGE_KEY, theme)
}

/// Sets `data-theme` on `<body>` so the stylesheet picks the palette.
pub fn apply_theme(theme: &str) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        if body.set_attribute("data-theme", theme).is_err() {
            log::warn!("Failed to apply theme {}", theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::Write(key.to_string()));
            }
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn missing_theme_falls_back_to_default() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store), "default");
        store.set(config::THEME_STORAGE_KEY, "").unwrap();
        assert_eq!(load_theme(&store), "default");
    }

    #[test]
    fn saved_theme_is_loaded_back() {
        let store = MemoryStore::default();
        save_theme(&store, "neon").unwrap();
        assert_eq!(load_theme(&store), "neon");
        assert_eq!(store.get("ludera-theme").as_deref(), Some("neon"));
    }

    #[test]
    fn failed_write_is_reported() {
        let store = MemoryStore { read_only: true, ..Default::default() };
        assert_eq!(
            save_theme(&store, "pastel"),
            Err(StorageError::Write("ludera-theme".to_string()))
        );
        assert_eq!(load_theme(&store), "default");
    }
}
