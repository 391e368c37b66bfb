//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to perform store operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),

    /// Key is not usable as a storage name.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Underlying filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CacheError {
    /// Whether the error came from decoding a stored value rather than
    /// from the store itself.
    pub fn is_corrupt_value(&self) -> bool {
        matches!(self, CacheError::SerializeError(e) if !e.is_io())
    }
}
