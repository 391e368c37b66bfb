//! Client-side shopping cart for the storefront.
//!
//! The cart is a draft held by the shopper's session: product lines captured
//! from the catalog, a coupon discount and a shipping address. It survives
//! restarts through a [`CartStorage`](cart::CartStorage) backend and keeps
//! its derived totals consistent after every change.
//!
//! - **Cart**: line items, pricing rules, the [`CartStore`](cart::CartStore)
//! - **Checkout**: shipping address draft
//!
//! # Example
//!
//! ```
//! use storefront_cache::{Cache, MemoryStore};
//! use storefront_commerce::prelude::*;
//!
//! let mut store = CartStore::hydrate(Cache::new(MemoryStore::new()));
//!
//! store.add_item(CartItem::new("p1", "Headphones", Money::from_major(500)).with_stock(3));
//! store.add_item(CartItem::new("p2", "Charger", Money::from_major(800)).with_stock(9));
//!
//! let state = store.state();
//! assert_eq!(state.subtotal, Money::from_major(1300));
//! assert_eq!(state.total, Money::from_major(1534));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod checkout;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{
        CartItem, CartState, CartStorage, CartStore, CartTotals, PricingPolicy, SubscriptionId,
    };

    // Checkout
    pub use crate::checkout::ShippingInfo;
}
