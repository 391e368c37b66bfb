//! Cart pricing calculations.

use crate::cart::CartItem;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Constants that drive the derived totals.
///
/// The defaults are the storefront's published rules: free shipping strictly
/// above 1000, otherwise a flat 200, and 18% tax rounded to whole units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    /// Subtotals strictly greater than this ship free.
    pub free_shipping_threshold: Money,
    /// Flat shipping fee below the threshold.
    pub shipping_fee: Money,
    /// Tax rate in basis points (1800 = 18%).
    pub tax_rate_bps: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Money::from_major(1000),
            shipping_fee: Money::from_major(200),
            tax_rate_bps: 1800,
        }
    }
}

impl PricingPolicy {
    /// Sum of price times quantity over all lines.
    pub fn subtotal<'a>(&self, items: impl IntoIterator<Item = &'a CartItem>) -> Money {
        items.into_iter().map(CartItem::line_total).sum()
    }

    /// Shipping for a given subtotal.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_shipping_threshold {
            Money::ZERO
        } else {
            self.shipping_fee
        }
    }

    /// Tax for a given subtotal, rounded to whole units.
    pub fn tax_for(&self, subtotal: Money) -> Money {
        subtotal.rate_rounded_to_major(self.tax_rate_bps)
    }

    /// Derive all totals from the cart lines and the applied discount.
    pub fn price<'a>(
        &self,
        items: impl IntoIterator<Item = &'a CartItem>,
        discount: Money,
    ) -> CartTotals {
        let subtotal = self.subtotal(items);
        let shipping_charges = self.shipping_for(subtotal);
        let tax = self.tax_for(subtotal);
        CartTotals {
            subtotal,
            tax,
            shipping_charges,
            discount,
            total: subtotal + tax + shipping_charges - discount,
        }
    }
}

/// Derived pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Shipping cost.
    pub shipping_charges: Money,
    /// Discount applied by a coupon.
    pub discount: Money,
    /// Final total (subtotal + tax + shipping - discount).
    pub total: Money,
}

impl CartTotals {
    /// Check if a discount is applied.
    pub fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }

    /// Check if shipping is free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping_charges.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: i64, quantity: u32) -> CartItem {
        CartItem::new(id, id, Money::from_major(price)).with_quantity(quantity)
    }

    #[test]
    fn test_subtotal() {
        let policy = PricingPolicy::default();
        let items = [line("a", 100, 2), line("b", 250, 1)];
        assert_eq!(policy.subtotal(&items), Money::from_major(450));
    }

    #[test]
    fn test_shipping_threshold_is_strict() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.shipping_for(Money::from_major(1000)), Money::from_major(200));
        assert_eq!(policy.shipping_for(Money::from_major(1001)), Money::ZERO);
        assert_eq!(policy.shipping_for(Money::from_decimal(1000.01)), Money::ZERO);
    }

    #[test]
    fn test_tax_rounding() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.tax_for(Money::from_major(999)), Money::from_major(180));
        assert_eq!(policy.tax_for(Money::from_major(1300)), Money::from_major(234));
    }

    #[test]
    fn test_price_breakdown() {
        let policy = PricingPolicy::default();
        let items = [line("p1", 500, 1), line("p2", 800, 1)];

        let totals = policy.price(&items, Money::from_major(100));
        assert_eq!(totals.subtotal, Money::from_major(1300));
        assert_eq!(totals.shipping_charges, Money::ZERO);
        assert_eq!(totals.tax, Money::from_major(234));
        assert_eq!(totals.total, Money::from_major(1434));
        assert!(totals.has_discount());
        assert!(totals.has_free_shipping());
    }

    #[test]
    fn test_custom_policy() {
        let policy = PricingPolicy {
            free_shipping_threshold: Money::from_major(50),
            shipping_fee: Money::from_major(5),
            tax_rate_bps: 1000,
        };
        let totals = policy.price(&[line("a", 40, 1)], Money::ZERO);
        assert_eq!(totals.shipping_charges, Money::from_major(5));
        assert_eq!(totals.tax, Money::from_major(4));
        assert_eq!(totals.total, Money::from_major(49));
    }

    #[test]
    fn test_policy_partial_config() {
        let policy: PricingPolicy = serde_json::from_str(r#"{"shipping_fee": 99}"#).unwrap();
        assert_eq!(policy.shipping_fee, Money::from_major(99));
        assert_eq!(policy.tax_rate_bps, 1800);
    }
}
