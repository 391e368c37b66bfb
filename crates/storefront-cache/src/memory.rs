//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::{CacheError, KvStore};

/// A [`KvStore`] held entirely in memory.
///
/// Useful for tests and for sessions that should not outlive the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>, CacheError> {
        self.entries
            .lock()
            .map_err(|_| CacheError::StoreError("memory store lock poisoned".to_string()))
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.lock()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.lock()?.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let mut keys: Vec<String> = self.lock()?.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("a", b"1").unwrap();
        store.set("a", b"2").unwrap();

        assert_eq!(store.get("a").unwrap(), Some(b"2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_keys_sorted() {
        let store = MemoryStore::new();
        store.set("b", b"").unwrap();
        store.set("a", b"").unwrap();
        store.set("c", b"").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("nothing").unwrap(), None);
    }
}
