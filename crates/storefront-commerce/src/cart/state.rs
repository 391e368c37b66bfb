//! Cart state and its transitions.

use crate::cart::{CartItem, CartTotals, PricingPolicy};
use crate::checkout::ShippingInfo;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The whole cart: lines, derived totals, discount and shipping address.
///
/// This is both the in-memory model and the persisted form; it round-trips
/// through serde without any mapping step. Transitions live on
/// [`CartStore`](crate::cart::CartStore), which is the only writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// True only while a mutation is in progress.
    pub loading: bool,
    /// Lines in display order.
    pub cart_items: Vec<CartItem>,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Shipping cost.
    pub shipping_charges: Money,
    /// Discount applied by a coupon.
    pub discount: Money,
    /// subtotal + tax + shipping - discount.
    pub total: Money,
    /// Last saved shipping address.
    pub shipping_info: ShippingInfo,
}

impl CartState {
    /// The canonical empty cart.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.cart_items.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.cart_items.len()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.cart_items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get a line by product.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.cart_items.iter().find(|i| &i.product_id == product_id)
    }

    /// Current totals as one value.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            subtotal: self.subtotal,
            tax: self.tax,
            shipping_charges: self.shipping_charges,
            discount: self.discount,
            total: self.total,
        }
    }

    /// Add or update a line.
    ///
    /// An existing line takes the incoming quantity when it is positive and
    /// otherwise grows by one. A new line is appended, with an unspecified
    /// quantity treated as 1.
    pub(crate) fn add_item(&mut self, mut item: CartItem) {
        let quantity = self.quantity_after_add(&item);
        if let Some(existing) = self
            .cart_items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            existing.quantity = quantity;
            return;
        }

        item.quantity = quantity;
        self.cart_items.push(item);
    }

    /// Quantity the line for `item` would hold after [`add_item`](Self::add_item).
    pub(crate) fn quantity_after_add(&self, item: &CartItem) -> u32 {
        match self.get_item(&item.product_id) {
            Some(_) if item.quantity > 0 => item.quantity,
            Some(existing) => existing.quantity.saturating_add(1),
            None => item.quantity.max(1),
        }
    }

    /// Remove a line. Returns whether anything was removed.
    pub(crate) fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.cart_items.len();
        self.cart_items.retain(|i| &i.product_id != product_id);
        self.cart_items.len() < len_before
    }

    /// Raise a line's quantity by one, bounded by its recorded stock.
    pub(crate) fn increment(&mut self, product_id: &ProductId) -> Result<u32, CommerceError> {
        let item = self
            .cart_items
            .iter_mut()
            .find(|i| &i.product_id == product_id)
            .ok_or_else(|| CommerceError::ItemNotInCart(product_id.to_string()))?;

        let requested = item.quantity.saturating_add(1);
        if requested > item.stock {
            return Err(CommerceError::InsufficientStock {
                product_id: product_id.to_string(),
                requested,
                available: item.stock,
            });
        }

        item.quantity = requested;
        Ok(requested)
    }

    /// Lower a line's quantity by one.
    ///
    /// A line that would reach zero is removed. Returns the remaining
    /// quantity, or `None` if the line was removed.
    pub(crate) fn decrement(
        &mut self,
        product_id: &ProductId,
    ) -> Result<Option<u32>, CommerceError> {
        let index = self
            .cart_items
            .iter()
            .position(|i| &i.product_id == product_id)
            .ok_or_else(|| CommerceError::ItemNotInCart(product_id.to_string()))?;

        let remaining = self.cart_items[index].quantity.saturating_sub(1);
        if remaining == 0 {
            self.cart_items.remove(index);
            return Ok(None);
        }

        self.cart_items[index].quantity = remaining;
        Ok(Some(remaining))
    }

    /// Recompute every derived field from the lines and the discount.
    pub(crate) fn recompute_totals(&mut self, policy: &PricingPolicy) {
        let totals = policy.price(&self.cart_items, self.discount);
        self.subtotal = totals.subtotal;
        self.tax = totals.tax;
        self.shipping_charges = totals.shipping_charges;
        self.total = totals.total;
    }

    pub(crate) fn apply_discount(&mut self, amount: Money) {
        self.discount = amount;
    }

    pub(crate) fn save_shipping_info(&mut self, info: ShippingInfo) {
        self.shipping_info = info;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: &str, price: i64) -> CartItem {
        CartItem::new(id, format!("Product {}", id), Money::from_major(price)).with_stock(10)
    }

    fn ids(state: &CartState) -> Vec<&str> {
        state.cart_items.iter().map(|i| i.product_id.as_str()).collect()
    }

    #[test]
    fn test_add_new_item_appends() {
        let mut state = CartState::empty();
        state.add_item(item("p1", 500).with_quantity(2));
        state.add_item(item("p2", 800));

        assert_eq!(ids(&state), vec!["p1", "p2"]);
        assert_eq!(state.cart_items[0].quantity, 2);
        // Unspecified quantity on a new line becomes 1
        assert_eq!(state.cart_items[1].quantity, 1);
    }

    #[test]
    fn test_add_existing_with_quantity_sets() {
        let mut state = CartState::empty();
        state.add_item(item("p1", 500).with_quantity(5));
        state.add_item(item("p1", 500).with_quantity(3));

        assert_eq!(state.line_count(), 1);
        assert_eq!(state.cart_items[0].quantity, 3);
    }

    #[test]
    fn test_add_existing_without_quantity_increments() {
        let mut state = CartState::empty();
        state.add_item(item("p1", 500).with_quantity(2));
        state.add_item(item("p1", 500));

        assert_eq!(state.line_count(), 1);
        assert_eq!(state.cart_items[0].quantity, 3);
    }

    #[test]
    fn test_add_existing_keeps_captured_fields() {
        let mut state = CartState::empty();
        state.add_item(item("p1", 500));
        state.add_item(item("p1", 900).with_quantity(2));

        // Price is captured at first add
        assert_eq!(state.cart_items[0].price, Money::from_major(500));
        assert_eq!(state.cart_items[0].quantity, 2);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut state = CartState::empty();
        state.add_item(item("p1", 500));
        let before = state.clone();

        assert!(!state.remove_item(&ProductId::new("nope")));
        assert_eq!(state, before);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut state = CartState::empty();
        for id in ["a", "b", "c"] {
            state.add_item(item(id, 1));
        }
        assert!(state.remove_item(&ProductId::new("b")));
        assert_eq!(ids(&state), vec!["a", "c"]);
    }

    #[test]
    fn test_increment_bounded_by_stock() {
        let mut state = CartState::empty();
        state.add_item(item("p1", 500).with_stock(2));

        assert_eq!(state.increment(&ProductId::new("p1")).unwrap(), 2);
        let err = state.increment(&ProductId::new("p1")).unwrap_err();
        assert!(matches!(
            err,
            CommerceError::InsufficientStock {
                requested: 3,
                available: 2,
                ..
            }
        ));
        assert_eq!(state.cart_items[0].quantity, 2);
    }

    #[test]
    fn test_increment_missing() {
        let mut state = CartState::empty();
        assert!(matches!(
            state.increment(&ProductId::new("p1")),
            Err(CommerceError::ItemNotInCart(_))
        ));
    }

    #[test]
    fn test_decrement_to_zero_removes() {
        let mut state = CartState::empty();
        state.add_item(item("p1", 500).with_quantity(2));
        state.add_item(item("p2", 800));

        assert_eq!(state.decrement(&ProductId::new("p1")).unwrap(), Some(1));
        assert_eq!(state.decrement(&ProductId::new("p1")).unwrap(), None);
        assert_eq!(ids(&state), vec!["p2"]);
        assert!(state.decrement(&ProductId::new("p1")).is_err());
    }

    #[test]
    fn test_item_count() {
        let mut state = CartState::empty();
        state.add_item(item("p1", 500).with_quantity(2));
        state.add_item(item("p2", 800).with_quantity(3));
        assert_eq!(state.item_count(), 5);
        assert_eq!(state.line_count(), 2);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let policy = PricingPolicy::default();
        let mut state = CartState::empty();
        state.add_item(item("p1", 500));
        state.add_item(item("p2", 800));
        state.apply_discount(Money::from_major(100));

        state.recompute_totals(&policy);
        let once = state.clone();
        state.recompute_totals(&policy);

        assert_eq!(state, once);
        assert_eq!(state.total, Money::from_major(1434));
    }

    #[test]
    fn test_persisted_layout() {
        let mut state = CartState::empty();
        state.add_item(item("p1", 500).with_photo("a.png"));
        state.recompute_totals(&PricingPolicy::default());

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["loading"], false);
        assert_eq!(value["cartItems"][0]["productId"], "p1");
        assert_eq!(value["cartItems"][0]["photo"], "a.png");
        assert_eq!(value["cartItems"][0]["price"], 500);
        assert_eq!(value["cartItems"][0]["stock"], 10);
        assert_eq!(value["cartItems"][0]["quantity"], 1);
        assert_eq!(value["subtotal"], 500);
        assert_eq!(value["tax"], 90);
        assert_eq!(value["shippingCharges"], 200);
        assert_eq!(value["discount"], 0);
        assert_eq!(value["total"], 790);
        assert_eq!(value["shippingInfo"]["pinCode"], "");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut state = CartState::empty();
        state.add_item(item("p1", 500).with_quantity(2));
        state.add_item(CartItem::new("p2", "Cable", Money::from_decimal(149.5)).with_stock(3));
        state.apply_discount(Money::from_major(50));
        state.save_shipping_info(ShippingInfo::new(
            "1 Park St",
            "Kolkata",
            "WB",
            "India",
            "700016",
        ));
        state.recompute_totals(&PricingPolicy::default());

        let json = serde_json::to_string(&state).unwrap();
        let back: CartState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_reads_layout_written_by_browser_client() {
        let json = r#"{
            "loading": false,
            "cartItems": [
                {"productId": "66b0", "name": "Shoe", "photo": "uploads/shoe.jpg",
                 "price": 1200, "stock": 7, "quantity": 1}
            ],
            "subtotal": 1200, "tax": 216, "shippingCharges": 0,
            "discount": 0, "total": 1416,
            "shippingInfo": {"address": "", "city": "", "state": "",
                             "country": "", "pinCode": ""}
        }"#;

        let state: CartState = serde_json::from_str(json).unwrap();
        assert_eq!(state.line_count(), 1);
        assert_eq!(state.total, Money::from_major(1416));
    }

    proptest! {
        #[test]
        fn prop_add_keeps_lines_unique_and_ordered(
            ops in prop::collection::vec((0u8..6, 0u32..4), 0..40)
        ) {
            let mut state = CartState::empty();
            let mut first_seen: Vec<String> = Vec::new();

            for (id, quantity) in ops {
                let id = format!("p{}", id);
                if !first_seen.contains(&id) {
                    first_seen.push(id.clone());
                }
                state.add_item(item(&id, 10).with_quantity(quantity));
            }

            let lines: Vec<String> = state
                .cart_items
                .iter()
                .map(|i| i.product_id.to_string())
                .collect();
            prop_assert_eq!(lines, first_seen);
            prop_assert!(state.cart_items.iter().all(|i| i.quantity >= 1));
        }
    }
}
