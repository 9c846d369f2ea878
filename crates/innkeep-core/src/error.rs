//! # Error Types
//!
//! Domain-specific error types for innkeep-core.
//!
//! Two layers, following the registration/booking split:
//!
//! - [`ValidationError`] - malformed guest fields or rates; reported to the
//!   caller, never fatal, and never accompanied by state mutation
//! - [`BookingError`] - failed booking preconditions, surfaced as typed
//!   results the caller can match on; the defensive variants
//!   ([`BookingError::AlreadyBooked`], [`BookingError::UnknownRoom`]) mark
//!   invariant violations that cannot occur through the public flow

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::{CustomerId, RoomCategory, RoomId};

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation failures, named after the offending field.
///
/// Registration simply does not occur when one of these is returned.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too short after trimming.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// Field value does not match the required shape.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

// =============================================================================
// Booking Error
// =============================================================================

/// Booking failures.
///
/// The first four variants are ordinary precondition failures, checked in
/// this order by the ledger. `AlreadyBooked` and `UnknownRoom` are
/// programming-logic faults: the allocation query only ever hands out
/// available, known rooms.
#[derive(Debug, Error)]
pub enum BookingError {
    /// The hotel has no rooms registered at all.
    #[error("no rooms registered in the hotel")]
    NoInventory,

    /// No customer with the given id exists.
    #[error("no customer with id {0}")]
    UnknownCustomer(CustomerId),

    /// Stay-start date is not strictly before the stay-end date.
    #[error("stay start {start} is not before stay end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Every room of the requested category is already booked.
    #[error("no available room in category {0}")]
    NoAvailability(RoomCategory),

    /// The room's availability flag was already false.
    #[error("room {0} is already booked")]
    AlreadyBooked(RoomId),

    /// No room with the given id exists.
    #[error("no room with id {0}")]
    UnknownRoom(RoomId),

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BookingError.
pub type BookingResult<T> = Result<T, BookingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooShort { field: "name", min: 3 };
        assert_eq!(err.to_string(), "name must be at least 3 characters");
    }

    #[test]
    fn test_booking_error_messages() {
        let err = BookingError::UnknownCustomer(7);
        assert_eq!(err.to_string(), "no customer with id 7");

        let err = BookingError::NoAvailability(RoomCategory::Suite);
        assert_eq!(err.to_string(), "no available room in category suite");
    }

    #[test]
    fn test_validation_converts_to_booking_error() {
        let validation_err = ValidationError::Required { field: "email" };
        let booking_err: BookingError = validation_err.into();
        assert!(matches!(booking_err, BookingError::Validation(_)));
    }
}
