//! Persistent client-side storage for the auth token and user.
//!
//! Storage only exists in an interactive browser. [`UnavailableStore`] stands
//! in everywhere else, turning writes into no-ops and reads into `None`.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

pub const AUTH_TOKEN_KEY: &str = "friendlens.auth_token";
pub const AUTH_USER_KEY: &str = "friendlens.auth_user";

/// String key-value storage capability.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// Store used when no persistent storage is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Token and user persistence over a [`KeyValueStore`].
pub struct TokenStorage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TokenStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn set_auth_token(&self, token: &str) {
        self.store.set(AUTH_TOKEN_KEY, token);
    }

    pub fn get_auth_token(&self) -> Option<String> {
        self.store.get(AUTH_TOKEN_KEY)
    }

    /// Store the user as JSON text.
    pub fn set_auth_user<T: Serialize>(&self, user: &T) {
        match serde_json::to_string(user) {
            Ok(text) => self.store.set(AUTH_USER_KEY, &text),
            Err(e) => tracing::warn!("Failed to serialize auth user: {}", e),
        }
    }

    /// Read the stored user; unreadable text yields `None`.
    pub fn get_auth_user<T: DeserializeOwned>(&self) -> Option<T> {
        let text = self.store.get(AUTH_USER_KEY)?;
        serde_json::from_str(&text).ok()
    }

    pub fn clear(&self) {
        self.store.remove(AUTH_TOKEN_KEY);
        self.store.remove(AUTH_USER_KEY);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
