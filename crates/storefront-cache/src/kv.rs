//! Key-value store port with automatic serialization.

use std::sync::Arc;

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// A synchronous byte-oriented key-value store.
///
/// Every call runs to completion before returning; there is no queuing or
/// background flushing. Implementations use interior mutability so a store
/// can be shared behind `&` or `Arc`.
pub trait KvStore {
    /// Get the raw bytes stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check whether `key` holds a value.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }

    /// List all keys, sorted.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        (**self).exists(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        (**self).keys()
    }
}

impl<S: KvStore + ?Sized> KvStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        (**self).exists(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        (**self).keys()
    }
}

/// Type-safe cache over any [`KvStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone, Default)]
pub struct Cache<S> {
    store: S,
}

impl<S: KvStore> Cache<S> {
    /// Wrap a store.
    ///
    /// # Example
    ///
    /// ```
    /// use storefront_cache::{Cache, MemoryStore};
    /// let cache = Cache::new(MemoryStore::new());
    /// cache.set("greeting", &"hello").unwrap();
    /// assert_eq!(cache.get::<String>("greeting").unwrap().as_deref(), Some("hello"));
    /// ```
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and
    /// [`CacheError::SerializeError`] if the stored bytes don't decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }
}
