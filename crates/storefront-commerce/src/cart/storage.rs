//! Persistence port for the cart.

use crate::cart::CartState;
use crate::error::CommerceError;
use storefront_cache::{Cache, KvStore};

/// Key the cart is stored under. Private to the cart store.
pub(crate) const CART_STORAGE_KEY: &str = "cartItems";

/// Durable storage for a single [`CartState`].
///
/// Calls are synchronous and complete before returning.
pub trait CartStorage {
    /// Read the stored cart, if any.
    fn load(&self) -> Result<Option<CartState>, CommerceError>;

    /// Replace the stored cart.
    fn save(&self, state: &CartState) -> Result<(), CommerceError>;
}

impl<S: KvStore> CartStorage for Cache<S> {
    fn load(&self) -> Result<Option<CartState>, CommerceError> {
        Ok(self.get(CART_STORAGE_KEY)?)
    }

    fn save(&self, state: &CartState) -> Result<(), CommerceError> {
        Ok(self.set(CART_STORAGE_KEY, state)?)
    }
}

impl<T: CartStorage + ?Sized> CartStorage for &T {
    fn load(&self) -> Result<Option<CartState>, CommerceError> {
        (**self).load()
    }

    fn save(&self, state: &CartState) -> Result<(), CommerceError> {
        (**self).save(state)
    }
}
