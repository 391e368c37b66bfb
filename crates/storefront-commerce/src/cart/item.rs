//! Cart line items.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product line in the cart.
///
/// Display fields and price are captured when the product is added and are
/// never re-synced with the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product being purchased; unique within a cart.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Photo path or URL (denormalized for display).
    #[serde(default)]
    pub photo: String,
    /// Unit price at add-time.
    pub price: Money,
    /// Known available quantity at add-time. Client-side hint only.
    #[serde(default)]
    pub stock: u32,
    /// Quantity. Zero on an incoming item means "not specified".
    #[serde(default)]
    pub quantity: u32,
}

impl CartItem {
    /// Create an item with no photo, no known stock and no quantity.
    pub fn new(product_id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            photo: String::new(),
            price,
            stock: 0,
            quantity: 0,
        }
    }

    /// Set the photo.
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = photo.into();
        self
    }

    /// Set the known stock.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Set the quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.price * i64::from(self.quantity)
    }

    /// Whether the product had no stock when it was captured.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}
