//! # Boundary Error Type
//!
//! Unified, serializable error for the command dispatcher. Domain errors
//! from `innkeep-core` are mapped to a machine-readable [`ErrorCode`] plus a
//! human-readable message; the defensive invariant violations surface as
//! `Internal` because no caller action can cause or fix them.

use serde::Serialize;

use innkeep_core::{BookingError, ValidationError};

/// Error returned from dispatched commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NO_AVAILABILITY",
///   "message": "no available room in category suite"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable error message for display.
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced entity does not exist.
    NotFound,

    /// Input validation failed; registration did not occur.
    ValidationError,

    /// The hotel has no rooms registered at all.
    NoInventory,

    /// Every room of the requested category is booked.
    NoAvailability,

    /// Stay-start is not strictly before stay-end.
    InvalidDateRange,

    /// Programming-logic fault; not caused by caller input.
    Internal,
}

impl ApiError {
    /// Creates a new boundary error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts guest-field validation failures to boundary errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts booking failures to boundary errors.
impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NoInventory => ApiError::new(ErrorCode::NoInventory, err.to_string()),
            BookingError::UnknownCustomer(id) => ApiError::not_found("Customer", id),
            BookingError::InvalidDateRange { .. } => {
                ApiError::new(ErrorCode::InvalidDateRange, err.to_string())
            }
            BookingError::NoAvailability(_) => {
                ApiError::new(ErrorCode::NoAvailability, err.to_string())
            }
            BookingError::AlreadyBooked(_) | BookingError::UnknownRoom(_) => {
                // Unreachable through the public booking flow.
                tracing::error!("booking invariant violated: {}", err);
                ApiError::internal(err.to_string())
            }
            BookingError::Validation(e) => e.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep_core::RoomCategory;

    #[test]
    fn test_booking_error_codes() {
        let err: ApiError = BookingError::NoInventory.into();
        assert_eq!(err.code, ErrorCode::NoInventory);

        let err: ApiError = BookingError::UnknownCustomer(9).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains('9'));

        let err: ApiError = BookingError::NoAvailability(RoomCategory::Bunk).into();
        assert_eq!(err.code, ErrorCode::NoAvailability);

        let err: ApiError = BookingError::AlreadyBooked(1).into();
        assert_eq!(err.code, ErrorCode::Internal);
    }

    #[test]
    fn test_validation_error_code() {
        let err: ApiError = ValidationError::Required { field: "name" }.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::not_found("Customer", 7)).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Customer not found: 7");
    }
}
