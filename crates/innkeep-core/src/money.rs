//! # Money Module
//!
//! Monetary values in the smallest currency unit (cents), stored as `i64`.
//! Nightly rates, reservation prices, and discount math never touch floating
//! point; percentage reductions are expressed in basis points and computed
//! with integer rounding.
//!
//! ## Usage
//! ```rust
//! use innkeep_core::money::Money;
//!
//! let rate = Money::from_cents(80_00); // $80.00 per night
//! let total = rate * 3;                // $240.00
//! assert_eq!(total.cents(), 240_00);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in cents.
///
/// Single-field tuple struct: a zero-cost wrapper over `i64` that keeps
/// cents from being confused with counts (nights, guests) at type level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use innkeep_core::money::Money;
    ///
    /// let rate = Money::from_cents(120_50); // $120.50
    /// assert_eq!(rate.cents(), 12050);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a percentage reduction and returns the reduced amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Reduction in basis points (1000 = 10%)
    ///
    /// ## Rounding
    /// The reduction amount is computed as
    /// `(cents * bps + 5000) / 10000` in `i128`, rounding half up, then
    /// subtracted. The result never exceeds the input for non-negative
    /// amounts.
    ///
    /// ## Example
    /// ```rust
    /// use innkeep_core::money::Money;
    ///
    /// let total = Money::from_cents(700_00);
    /// let discounted = total.apply_percentage_discount(500); // 5% off
    /// assert_eq!(discounted.cents(), 665_00);
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        let discount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Human-readable form for logs and error messages, e.g. `$120.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a count (nights of a stay).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(12050);
        assert_eq!(money.cents(), 12050);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(12050)), "$120.50");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);

        assert_eq!((a + b).cents(), 1250);
        assert_eq!((a - b).cents(), 750);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_percentage_discount() {
        // 10% off $100.00
        let total = Money::from_cents(100_00);
        assert_eq!(total.apply_percentage_discount(1000).cents(), 90_00);

        // 5% off $630.00 keeps the half cent via half-up rounding:
        // 63000 * 500 / 10000 = 3150
        let total = Money::from_cents(630_00);
        assert_eq!(total.apply_percentage_discount(500).cents(), 598_50);
    }

    #[test]
    fn test_percentage_discount_rounding() {
        // 10% of 33 cents is 3.3 cents; discount rounds down to 3
        assert_eq!(Money::from_cents(33).apply_percentage_discount(1000).cents(), 30);
        // 10% of 35 cents is 3.5 cents; discount rounds up to 4
        assert_eq!(Money::from_cents(35).apply_percentage_discount(1000).cents(), 31);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert!(Money::from_cents(-1).is_negative());
    }
}
