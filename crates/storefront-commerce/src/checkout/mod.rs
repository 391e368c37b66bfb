//! Checkout module.
//!
//! Holds the shipping address draft captured before an order is placed.

mod address;

pub use address::ShippingInfo;
