//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that revenue (`sales * price`)
//! stays exact. Only derived ratios such as revenue per pageview are floats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use marketplace_analytics::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole dollars
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars.saturating_mul(100))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiply a unit price by a quantity
    ///
    /// Returns `None` if the product does not fit in an `i64` of cents.
    pub fn checked_times(self, quantity: u64) -> Option<Self> {
        let quantity = i64::try_from(quantity).ok()?;
        self.0.checked_mul(quantity).map(Self)
    }

    /// The amount in currency units, for ratios and chart scaling
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }

    /// Format with thousands separators, dropping a zero cents part
    ///
    /// `Money::from_dollars(48750)` becomes `$48,750`.
    pub fn format_grouped(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let whole = group_thousands(self.dollars().unsigned_abs());
        if self.cents_part() == 0 {
            format!("{}{}{}", sign, symbol, whole)
        } else {
            format!("{}{}{}.{:02}", sign, symbol, whole, self.cents_part())
        }
    }
}

/// Insert comma separators into an unsigned integer
pub fn group_thousands(value: u64) -> String {
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

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc + *m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        assert_eq!(Money::from_dollars(25).cents(), 2500);
        assert_eq!(Money::from_cents(1050).dollars(), 10);
        assert_eq!(Money::from_cents(1050).cents_part(), 50);
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_checked_times_is_exact() {
        let price = Money::from_dollars(85);
        assert_eq!(price.checked_times(120), Some(Money::from_dollars(10_200)));
        assert_eq!(Money::from_cents(1999).checked_times(3).map(|m| m.cents()), Some(5997));
    }

    #[test]
    fn test_checked_times_out_of_range() {
        let price = Money::from_dollars(100);
        assert_eq!(price.checked_times(100_000_000_000_000_000), None);
        assert_eq!(Money::from_cents(1).checked_times(i64::MAX as u64 + 10), None);
        assert_eq!(Money::zero().checked_times(u64::MAX), None);
    }

    #[test]
    fn test_sum_saturates() {
        let amounts = [Money::from_cents(i64::MAX), Money::from_dollars(1)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(Money::from_dollars(48_750).format_grouped("$"), "$48,750");
        assert_eq!(Money::from_dollars(100).format_grouped("$"), "$100");
        assert_eq!(Money::from_cents(123_456_78).format_grouped("€"), "€123,456.78");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_dollars(1), Money::from_dollars(2), Money::from_cents(50)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 350);
    }
}
