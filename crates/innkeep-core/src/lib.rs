//! # innkeep-core: Pure Business Logic for the Booking Engine
//!
//! This crate is the heart of innkeep. It contains the booking engine's
//! business rules as pure functions and plain data types, with zero I/O
//! dependencies.
//!
//! ## Modules
//!
//! - [`types`] - Domain types (RoomCategory, Room, Customer, Reservation)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Price quotation with VIP and long-stay discounts
//! - [`error`] - Domain error types
//! - [`validation`] - Guest-field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output; even "today" is an
//!    argument, never a clock read
//! 2. **No I/O**: database, network, and file system access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use innkeep_core::money::Money;
//! use innkeep_core::pricing;
//!
//! // A $100.00 nightly rate, 7-night stay, non-VIP guest:
//! let rate = Money::from_cents(100_00);
//! let price = pricing::quote(rate, 7, false);
//!
//! // $700.00 with the 5% long-stay reduction applied
//! assert_eq!(price.cents(), 665_00);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{BookingError, BookingResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of recent reservations a guest must EXCEED to be promoted to VIP.
///
/// Promotion is strict: a guest with exactly this many reservations inside
/// the lookback window stays non-VIP.
pub const VIP_RESERVATION_THRESHOLD: usize = 3;

/// Length of the VIP lookback window, in months before today.
///
/// Only reservations whose stay-start date falls strictly after
/// `today - VIP_LOOKBACK_MONTHS` count toward promotion.
pub const VIP_LOOKBACK_MONTHS: u32 = 12;

/// Minimum stay length, in nights, that earns the long-stay reduction.
pub const LONG_STAY_MIN_NIGHTS: i64 = 7;

/// VIP price reduction in basis points (1000 = 10%).
pub const VIP_DISCOUNT_BPS: u32 = 1000;

/// Long-stay price reduction in basis points (500 = 5%).
pub const LONG_STAY_DISCOUNT_BPS: u32 = 500;

/// Minimum guest name length, counted on the trimmed name.
pub const MIN_GUEST_NAME_LEN: usize = 3;
