//! # Validation Module
//!
//! Guest-field validation for innkeep.
//!
//! Each function checks one field and returns the first violated rule as a
//! [`ValidationError`] naming that field. Callers run all checks before any
//! store mutation, so a failed registration leaves the registry untouched.
//!
//! ## Usage
//! ```rust
//! use innkeep_core::validation::{validate_guest_name, validate_national_id};
//!
//! validate_guest_name("Daniela").unwrap();
//! validate_national_id("12345678A").unwrap();
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::MIN_GUEST_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// Anchored so the whole field must match, not a substring.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.+-]+@[\w.-]+\.[A-Za-z]{2,}$").expect("email pattern"));

static NATIONAL_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{8}[A-Z]$").expect("national id pattern"));

// =============================================================================
// String Validators
// =============================================================================

/// Validates a guest display name.
///
/// ## Rules
/// - Must not be blank
/// - Must be at least 3 characters after trimming
///
/// ## Example
/// ```rust
/// use innkeep_core::validation::validate_guest_name;
///
/// assert!(validate_guest_name("Ana María").is_ok());
/// assert!(validate_guest_name("  Al ").is_err());
/// ```
pub fn validate_guest_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.chars().count() < MIN_GUEST_NAME_LEN {
        return Err(ValidationError::TooShort {
            field: "name",
            min: MIN_GUEST_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an email address against the `local@domain.tld` shape.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidFormat {
            field: "email",
            reason: "expected local@domain.tld",
        });
    }

    Ok(())
}

/// Validates a national id: exactly 8 digits followed by one uppercase
/// letter.
pub fn validate_national_id(national_id: &str) -> ValidationResult<()> {
    if !NATIONAL_ID_RE.is_match(national_id) {
        return Err(ValidationError::InvalidFormat {
            field: "national_id",
            reason: "expected 8 digits followed by an uppercase letter",
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a nightly base rate in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (complimentary rooms)
pub fn validate_rate_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "base_rate",
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
