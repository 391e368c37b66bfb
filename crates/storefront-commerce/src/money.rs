//! Money type for representing monetary values.
//!
//! Amounts are held as integer minor units (paise, cents) so that summing
//! line totals and deriving tax never picks up floating-point drift. On the
//! wire an amount is a plain JSON number in major units (`500`, `499.5`),
//! which is the shape the persisted cart has always used.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

/// Minor units per major unit.
pub const MINOR_PER_MAJOR: i64 = 100;

/// Supported display currencies.
///
/// Amounts themselves carry no currency; the storefront prices everything in
/// one currency and this only selects how amounts are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary amount in minor units.
///
/// Arithmetic operators saturate at the `i64` bounds instead of wrapping or
/// panicking; use the `checked_*` methods when overflow must be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    minor: i64,
}

impl Money {
    /// Zero.
    pub const ZERO: Money = Money { minor: 0 };

    /// Create an amount from minor units.
    pub const fn from_minor(minor: i64) -> Self {
        Self { minor }
    }

    /// Create an amount from whole major units.
    ///
    /// ```
    /// use storefront_commerce::money::Money;
    /// assert_eq!(Money::from_major(500).minor(), 50_000);
    /// ```
    pub const fn from_major(major: i64) -> Self {
        Self {
            minor: major.saturating_mul(MINOR_PER_MAJOR),
        }
    }

    /// Create an amount from a decimal major-unit value, rounding to the
    /// nearest minor unit.
    ///
    /// ```
    /// use storefront_commerce::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.minor(), 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::from_minor((amount * MINOR_PER_MAJOR as f64).round() as i64)
    }

    /// Amount in minor units.
    pub const fn minor(&self) -> i64 {
        self.minor
    }

    /// Whole major units, truncated toward zero.
    pub const fn major(&self) -> i64 {
        self.minor / MINOR_PER_MAJOR
    }

    /// Convert to a decimal major-unit value.
    pub fn to_decimal(&self) -> f64 {
        self.minor as f64 / MINOR_PER_MAJOR as f64
    }

    /// Check if this has no fractional part.
    pub const fn is_whole(&self) -> bool {
        self.minor % MINOR_PER_MAJOR == 0
    }

    /// Check if this is zero.
    pub const fn is_zero(&self) -> bool {
        self.minor == 0
    }

    /// Check if this is positive.
    pub const fn is_positive(&self) -> bool {
        self.minor > 0
    }

    /// Check if this is negative.
    pub const fn is_negative(&self) -> bool {
        self.minor < 0
    }

    /// Try to add another amount.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.minor.checked_add(other.minor).map(Money::from_minor)
    }

    /// Try to subtract another amount.
    pub fn checked_sub(&self, other: Money) -> Option<Money> {
        self.minor.checked_sub(other.minor).map(Money::from_minor)
    }

    /// Try to multiply by a quantity.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        self.minor.checked_mul(factor).map(Money::from_minor)
    }

    /// Apply a rate given in basis points (1/100 of a percent) and round
    /// the result to the nearest whole major unit, halves rounding up.
    ///
    /// ```
    /// use storefront_commerce::money::Money;
    /// // 18% of 999 is 179.82
    /// assert_eq!(Money::from_major(999).rate_rounded_to_major(1800), Money::from_major(180));
    /// ```
    pub fn rate_rounded_to_major(&self, basis_points: u32) -> Money {
        // minor * bps / 10_000 gives minor units; one more /100 gives major.
        const DENOMINATOR: i128 = 10_000 * MINOR_PER_MAJOR as i128;
        let scaled = self.minor as i128 * basis_points as i128;
        let major = (scaled + DENOMINATOR / 2).div_euclid(DENOMINATOR);
        let major = i64::try_from(major).unwrap_or(if major < 0 { i64::MIN } else { i64::MAX });
        Money::from_major(major)
    }

    /// Format as a display string (e.g., "₹1,534" or "₹49.99").
    pub fn display(&self, currency: Currency) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, currency.symbol(), self.abs_amount())
    }

    /// Format without symbol (e.g., "1534" or "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}", sign, self.abs_amount())
    }

    fn abs_amount(&self) -> String {
        let abs = self.minor.unsigned_abs();
        let major = abs / MINOR_PER_MAJOR as u64;
        let cents = abs % MINOR_PER_MAJOR as u64;
        let grouped = group_thousands(major);
        if cents == 0 {
            grouped
        } else {
            format!("{}.{:02}", grouped, cents)
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_minor(self.minor.saturating_add(other.minor))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::from_minor(self.minor.saturating_sub(other.minor))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money::from_minor(self.minor.saturating_mul(factor))
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money::from_minor(self.minor.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_amount())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_i64(self.major())
        } else {
            serializer.serialize_f64(self.to_decimal())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a finite number of currency units")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(MINOR_PER_MAJOR)
            .map(Money::from_minor)
            .ok_or_else(|| E::custom(format!("amount {} out of range", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        let v = i64::try_from(v).map_err(|_| E::custom(format!("amount {} out of range", v)))?;
        self.visit_i64(v)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        let minor = (v * MINOR_PER_MAJOR as f64).round();
        if !minor.is_finite() || minor.abs() >= i64::MAX as f64 {
            return Err(E::custom(format!("amount {} out of range", v)));
        }
        Ok(Money::from_minor(minor as i64))
    }
}
