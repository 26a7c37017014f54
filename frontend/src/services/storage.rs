//! `KeyValueStore` over the browser's Web Storage.
//!
//! Storage can be unavailable (private mode, disabled cookies); reads then
//! return `None` and writes are dropped.

use shared::storage::KeyValueStore;
use web_sys::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserStore {
    Local,
    Session,
}

impl BrowserStore {
    fn storage(&self) -> Option<Storage> {
        let window = web_sys::window()?;
        match self {
            BrowserStore::Local => window.local_storage().ok().flatten(),
            BrowserStore::Session => window.session_storage().ok().flatten(),
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        let _ = storage.set_item(key, value);
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
