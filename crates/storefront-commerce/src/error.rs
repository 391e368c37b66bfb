//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Product has no stock at all.
    #[error("Product is out of stock: {0}")]
    OutOfStock(String),

    /// Requested quantity is more than the known stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: String,
        requested: u32,
        available: u32,
    },

    /// Persisted cart could not be decoded.
    #[error("Corrupt cart state: {0}")]
    CorruptState(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),
}

impl From<storefront_cache::CacheError> for CommerceError {
    fn from(e: storefront_cache::CacheError) -> Self {
        if e.is_corrupt_value() {
            CommerceError::CorruptState(e.to_string())
        } else {
            CommerceError::CacheError(e.to_string())
        }
    }
}
