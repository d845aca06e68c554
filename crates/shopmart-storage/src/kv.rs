//! Key-value store with automatic JSON serialization.

use crate::StorageError;
use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Client-local key-value store.
///
/// Values are stored as JSON strings under string keys, mirroring how the
/// storefront UI uses browser `localStorage`. The handle is cheap to
/// clone; clones share the same backing map, so constructing a fresh
/// session store over a cloned handle behaves like a page reload reading
/// the same persisted state.
///
/// Access is single-threaded by design: one logical UI session owns the
/// store and all mutations happen on its event loop.
#[derive(Clone, Default)]
pub struct LocalStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl LocalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under a key, serialized as JSON.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.inner.borrow_mut().insert(key.to_string(), json);
        Ok(())
    }

    /// Store a raw string under a key without serializing.
    ///
    /// Exists so callers (and tests) can seed pre-existing or damaged
    /// persisted state.
    pub fn set_raw(&self, key: &str, raw: &str) {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }

    /// Get a value from the store.
    ///
    /// Returns `Ok(None)` if the key doesn't exist and an error if the
    /// stored value can't be decoded as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.inner.borrow().get(key) {
            Some(json) => {
                let value =
                    serde_json::from_str(json).map_err(|e| StorageError::Malformed {
                        key: key.to_string(),
                        reason: e.to_string(),
                    })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Load a value, degrading to the default on any failure.
    ///
    /// Missing keys yield `T::default()` silently; a malformed value also
    /// yields the default and is logged, never surfaced. Session stores
    /// load their persisted collections through this.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding malformed persisted value");
                T::default()
            }
        }
    }

    /// Remove a key. No-op if absent.
    pub fn remove(&self, key: &str) {
        self.inner.borrow_mut().remove(key);
    }

    /// Check whether a key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.borrow().contains_key(key)
    }

    /// All keys currently stored.
    pub fn keys(&self) -> Vec<String> {
        self.inner.borrow().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_round_trip() {
        let store = LocalStore::new();
        store.set("list", &vec!["a", "b", "c"]).unwrap();

        let back: Option<Vec<String>> = store.get("list").unwrap();
        assert_eq!(back, Some(vec!["a".into(), "b".into(), "c".into()]));
    }

    #[test]
    fn test_missing_key() {
        let store = LocalStore::new();
        let value: Option<Vec<String>> = store.get("absent").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let store = LocalStore::new();
        store.set_raw("broken", "{not json");

        let result: Result<Option<Vec<String>>, _> = store.get("broken");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_degrades_silently() {
        let store = LocalStore::new();
        store.set_raw("broken", "][");

        let value: Vec<String> = store.load_or_default("broken");
        assert!(value.is_empty());

        let missing: Vec<String> = store.load_or_default("absent");
        assert!(missing.is_empty());
    }

    #[test]
    fn test_clones_share_backing() {
        let store = LocalStore::new();
        store.set("n", &41).unwrap();

        let other = store.clone();
        other.set("n", &42).unwrap();

        let n: Option<i64> = store.get("n").unwrap();
        assert_eq!(n, Some(42));
    }

    #[test]
    fn test_remove_and_contains() {
        let store = LocalStore::new();
        store.set("k", &1).unwrap();
        assert!(store.contains("k"));

        store.remove("k");
        assert!(!store.contains("k"));
        store.remove("k"); // no-op
    }
}
