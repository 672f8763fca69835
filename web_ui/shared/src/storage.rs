//! Key/value persistence for UI preferences.
//!
//! Values are stored as bare strings, the way the pages' inline scripts wrote them, so this
//! goes through the raw `web_sys::Storage` rather than gloo's JSON encoding.

use std::collections::HashMap;

use gloo::console;
use web_sys::Storage;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// The browser's `localStorage`. Where the browser refuses access (storage disabled, sandboxed
/// frames) values only live for the lifetime of the page.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: Option<Storage>,
    fallback: MemoryStorage,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            console::warn!("localStorage is unavailable, preferences won't be kept");
        }
        Self::from_storage(storage)
    }

    pub fn from_storage(storage: Option<Storage>) -> Self {
        BrowserStorage {
            storage,
            fallback: MemoryStorage::default(),
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let Some(storage) = self.storage.as_ref() else {
            return self.fallback.get(key);
        };
        let l = storage.get_item(key);
        #[cfg(debug_assertions)]
        console::debug!(format!("storage::get {} -> {:?}", key, l).as_str());
        l.ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            self.fallback.set(key, value);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            console::error!(format!("failed to set {} -> {:?}", key, e));
        }
    }
}

/// An in-memory store, for hosts without `localStorage` and for tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values, writes: 0 }
    }

    /// How many times `set` has been called
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.values.insert(key.to_string(), value.to_string());
    }
}
