//! Key-value persistence for the client stores
//!
//! Each store keeps one JSON blob under a fixed key:
//! - `user`: the signed-in profile
//! - `gameData`: player, ship, current sector and counters

mod memory;
mod paths;
mod sqlite;

pub use memory::MemoryStore;
pub use paths::DataDir;
pub use sqlite::SqliteStore;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Storage key for the identity record
pub const USER_KEY: &str = "user";

/// Storage key for the game snapshot
pub const GAME_DATA_KEY: &str = "gameData";

/// String key-value storage backend
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// Handle that lets several stores write into one backend
pub struct SharedStore<S> {
    inner: Rc<RefCell<S>>,
}

impl<S> SharedStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore> KeyValueStore for SharedStore<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner.borrow().get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner.borrow_mut().set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.inner.borrow_mut().remove_item(key)
    }
}

/// Read and decode the blob under `key`; `None` when nothing is stored
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.get_item(key)? {
        Some(json) => {
            let value = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse stored {}", key))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Encode `value` and store it under `key`
pub fn save_json<T: Serialize>(store: &mut impl KeyValueStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize {}", key))?;
    store.set_item(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    #[test]
    fn test_shared_store_sees_writes_from_clones() {
        let mut a = SharedStore::new(MemoryStore::new());
        let b = a.clone();
        a.set_item("k", "v").unwrap();
        assert_eq!(b.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_load_json_missing_key() {
        let store = MemoryStore::new();
        let user: Option<User> = load_json(&store, USER_KEY).unwrap();
        assert!(user.is_none());
    }

    #[test]
    fn test_load_json_rejects_garbage() {
        let mut store = MemoryStore::new();
        store.set_item(USER_KEY, "{not json").unwrap();
        let result: Result<Option<User>> = load_json(&store, USER_KEY);
        assert!(result.is_err());
    }
}
