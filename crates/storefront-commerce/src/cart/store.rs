//! The cart store: single owner of the session's cart.
//!
//! Every mutation runs to completion, recomputes derived totals, writes the
//! full state through to storage and then notifies subscribers. Storage
//! failures never abort a mutation; the in-memory state stays authoritative
//! for the rest of the session.

use std::fmt;

use crate::cart::{CartItem, CartState, CartStorage, PricingPolicy};
use crate::checkout::ShippingInfo;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&CartState)>;

/// Owns the [`CartState`] for one session.
///
/// Readers get `&CartState` or an owned snapshot; the only way to change the
/// cart is through the methods below.
pub struct CartStore<S> {
    state: CartState,
    storage: S,
    policy: PricingPolicy,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: CartStorage> CartStore<S> {
    /// Load the session's cart from `storage` using the default pricing.
    ///
    /// Never fails: missing, corrupt or unreadable data yields an empty cart.
    pub fn hydrate(storage: S) -> Self {
        Self::hydrate_with_policy(storage, PricingPolicy::default())
    }

    /// Load the session's cart with explicit pricing rules.
    ///
    /// A decoded state is taken as stored, apart from `loading`. Lines are
    /// not re-validated: a zero quantity or a repeated product id written by
    /// another client stays until the next mutation touches that line.
    pub fn hydrate_with_policy(storage: S, policy: PricingPolicy) -> Self {
        let state = match storage.load() {
            Ok(Some(mut state)) => {
                state.loading = false;
                tracing::debug!(lines = state.line_count(), "hydrated cart");
                state
            }
            Ok(None) => CartState::empty(),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable cart");
                CartState::empty()
            }
        };

        Self {
            state,
            storage,
            policy,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> CartState {
        self.state.clone()
    }

    /// Pricing rules in effect.
    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Get a line by product.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.state.get_item(product_id)
    }

    /// Register a listener called with the settled state after every
    /// mutation, in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&CartState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() < len_before
    }

    /// Add a product, or update the quantity of an existing line.
    ///
    /// A positive `item.quantity` replaces an existing line's quantity; zero
    /// bumps it by one. Unknown products are appended at the end.
    pub fn add_item(&mut self, item: CartItem) {
        self.begin();
        tracing::debug!(product_id = %item.product_id, quantity = item.quantity, "add item");
        self.state.add_item(item);
        self.settle("add_item");
    }

    /// Add a product after checking it against its captured stock.
    ///
    /// The check applies to the quantity the line ends up with, so re-adding
    /// a line that is already at its stock limit is refused.
    pub fn try_add_item(&mut self, item: CartItem) -> Result<(), CommerceError> {
        if item.is_out_of_stock() {
            return Err(CommerceError::OutOfStock(item.product_id.to_string()));
        }
        let requested = self.state.quantity_after_add(&item);
        if requested > item.stock {
            return Err(CommerceError::InsufficientStock {
                product_id: item.product_id.to_string(),
                requested,
                available: item.stock,
            });
        }
        self.add_item(item);
        Ok(())
    }

    /// Remove a line. Removing a product that isn't in the cart is a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.begin();
        let removed = self.state.remove_item(product_id);
        tracing::debug!(%product_id, removed, "remove item");
        self.settle("remove_item");
    }

    /// Raise a line's quantity by one. Returns the new quantity.
    pub fn increment(&mut self, product_id: &ProductId) -> Result<u32, CommerceError> {
        self.begin();
        match self.state.increment(product_id) {
            Ok(quantity) => {
                self.settle("increment");
                Ok(quantity)
            }
            Err(e) => {
                self.abort();
                Err(e)
            }
        }
    }

    /// Lower a line's quantity by one, removing the line when it reaches
    /// zero. Returns the remaining quantity, or `None` if removed.
    pub fn decrement(&mut self, product_id: &ProductId) -> Result<Option<u32>, CommerceError> {
        self.begin();
        match self.state.decrement(product_id) {
            Ok(remaining) => {
                self.settle("decrement");
                Ok(remaining)
            }
            Err(e) => {
                self.abort();
                Err(e)
            }
        }
    }

    /// Recompute derived totals from the lines and discount.
    ///
    /// Every other mutation already does this; calling it again changes
    /// nothing but still writes through.
    pub fn recompute_totals(&mut self) {
        self.begin();
        self.settle("recompute_totals");
    }

    /// Set the coupon discount verbatim.
    pub fn apply_discount(&mut self, amount: Money) {
        self.begin();
        tracing::debug!(%amount, "apply discount");
        self.state.apply_discount(amount);
        self.settle("apply_discount");
    }

    /// Replace the saved shipping address.
    pub fn save_shipping_info(&mut self, info: ShippingInfo) {
        self.begin();
        self.state.save_shipping_info(info);
        self.settle("save_shipping_info");
    }

    /// Drop everything and go back to the empty cart.
    pub fn reset(&mut self) {
        self.begin();
        self.state = CartState::empty();
        // The empty cart keeps all-zero totals; no recompute.
        self.finish("reset");
    }

    fn begin(&mut self) {
        self.state.loading = true;
    }

    fn settle(&mut self, action: &'static str) {
        self.state.recompute_totals(&self.policy);
        self.finish(action);
    }

    fn finish(&mut self, action: &'static str) {
        self.state.loading = false;
        if let Err(e) = self.storage.save(&self.state) {
            tracing::warn!(action, error = %e, "failed to persist cart; keeping in-memory state");
        }
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }

    fn abort(&mut self) {
        self.state.loading = false;
    }
}

impl<S: fmt::Debug> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("storage", &self.storage)
            .field("policy", &self.policy)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
