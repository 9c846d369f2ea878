//! # Pricing Policy
//!
//! Pure price quotation for a stay. No state, no clock: the stay length and
//! the guest's VIP status at booking time are inputs.
//!
//! ## Discount Rules
//! - Base amount is `base_rate × nights`
//! - VIP guests get a 10% reduction
//! - Stays of 7 nights or more get a further 5% reduction
//! - Both reductions stack multiplicatively, VIP applied first

use crate::money::Money;
use crate::{LONG_STAY_DISCOUNT_BPS, LONG_STAY_MIN_NIGHTS, VIP_DISCOUNT_BPS};

/// Quotes the final price of a stay.
///
/// `nights` is the day count between stay-start and stay-end; the date-order
/// invariant enforced before reservation creation guarantees it is >= 1.
/// The result is never negative for non-negative rates and never exceeds
/// the undiscounted `base_rate × nights`.
///
/// ## Example
/// ```rust
/// use innkeep_core::money::Money;
/// use innkeep_core::pricing::quote;
///
/// // VIP on a week-long stay: both reductions stack
/// let price = quote(Money::from_cents(100_00), 7, true);
/// assert_eq!(price.cents(), 598_50); // 700.00 * 0.90 * 0.95
/// ```
pub fn quote(base_rate: Money, nights: i64, is_vip: bool) -> Money {
    let mut amount = base_rate * nights;

    if is_vip {
        amount = amount.apply_percentage_discount(VIP_DISCOUNT_BPS);
    }

    if nights >= LONG_STAY_MIN_NIGHTS {
        amount = amount.apply_percentage_discount(LONG_STAY_DISCOUNT_BPS);
    }

    amount
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_discount() {
        // 3 nights at $100.00, non-VIP
        assert_eq!(quote(Money::from_cents(100_00), 3, false).cents(), 300_00);
    }

    #[test]
    fn test_long_stay_discount_alone() {
        // 7 nights at $100.00: 700.00 * 0.95
        assert_eq!(quote(Money::from_cents(100_00), 7, false).cents(), 665_00);
    }

    #[test]
    fn test_vip_discount_alone() {
        // 6 nights at $100.00, VIP: 600.00 * 0.90
        assert_eq!(quote(Money::from_cents(100_00), 6, true).cents(), 540_00);
    }

    #[test]
    fn test_discounts_stack() {
        // 7 nights at $100.00, VIP: 700.00 * 0.90 * 0.95
        assert_eq!(quote(Money::from_cents(100_00), 7, true).cents(), 598_50);
    }

    #[test]
    fn test_long_stay_threshold_is_inclusive() {
        // 6 nights: no long-stay reduction; 7 nights: reduced
        assert_eq!(quote(Money::from_cents(50_00), 6, false).cents(), 300_00);
        assert_eq!(quote(Money::from_cents(50_00), 7, false).cents(), 332_50);
    }

    #[test]
    fn test_never_exceeds_undiscounted_amount() {
        for nights in 1..=14 {
            for is_vip in [false, true] {
                let base = Money::from_cents(77_77) * nights;
                let price = quote(Money::from_cents(77_77), nights, is_vip);
                assert!(price.cents() >= 0);
                assert!(price <= base);
            }
        }
    }

    #[test]
    fn test_zero_rate_stays_zero() {
        assert_eq!(quote(Money::zero(), 10, true).cents(), 0);
    }
}
