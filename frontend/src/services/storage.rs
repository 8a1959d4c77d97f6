//! Token storage backed by `window.localStorage`.
//!
//! Falls back to a no-op store when the browser has no usable storage
//! (private mode, blocked by policy), so callers never branch on it.

use shared::storage::{KeyValueStore, TokenStorage, UnavailableStore};

pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            tracing::warn!("Failed to write {} to local storage: {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            tracing::warn!("Failed to remove {} from local storage: {:?}", key, e);
        }
    }
}

pub type BrowserTokenStorage = TokenStorage<Box<dyn KeyValueStore>>;

pub fn token_storage() -> BrowserTokenStorage {
    let local = web_sys::window().and_then(|window| window.local_storage().ok().flatten());

    let store: Box<dyn KeyValueStore> = match local {
        Some(storage) => Box::new(BrowserStore { storage }),
        None => {
            tracing::debug!("Local storage unavailable, tokens will not persist");
            Box::new(UnavailableStore)
        }
    };

    TokenStorage::new(store)
}
