//! Shopping cart module.
//!
//! Contains the cart state, its line items, pricing rules, the storage port
//! and the store that ties them together.

mod item;
mod pricing;
mod state;
mod storage;
mod store;

pub use item::CartItem;
pub use pricing::{CartTotals, PricingPolicy};
pub use state::CartState;
pub use storage::CartStorage;
pub use store::{CartStore, SubscriptionId};
