//! # Domain Types
//!
//! Core domain types for the booking engine: room categories and their
//! occupancy limits, rooms, customers, and reservations.
//!
//! ## Identity
//! Every entity carries a dense, 1-based, sequentially assigned integer id.
//! Ids are never reused and never mutated; entities reference each other by
//! id, not by pointer.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Customer identifier, assigned sequentially from 1 at registration.
pub type CustomerId = u32;

/// Room identifier: the room's 1-based registration position.
pub type RoomId = u32;

/// Reservation identifier, 1-based and sequential within its room.
pub type ReservationId = u32;

// =============================================================================
// Room Category
// =============================================================================

/// Room class, the matching key during allocation.
///
/// The set is closed: unknown categories are rejected at the boundary by
/// deserialization, and occupancy is a total match with no fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomCategory {
    /// Single room for 1 guest.
    Single,
    /// Double room for up to 3 guests.
    Double,
    /// Suite for up to 4 guests.
    Suite,
    /// Bunk room for up to 8 guests.
    Bunk,
}

impl RoomCategory {
    /// All categories, in a stable order.
    pub const ALL: [RoomCategory; 4] = [
        RoomCategory::Single,
        RoomCategory::Double,
        RoomCategory::Suite,
        RoomCategory::Bunk,
    ];

    /// Maximum number of guests the category accommodates.
    #[inline]
    pub const fn max_guests(&self) -> u8 {
        match self {
            RoomCategory::Single => 1,
            RoomCategory::Double => 3,
            RoomCategory::Suite => 4,
            RoomCategory::Bunk => 8,
        }
    }

    /// Wire/display name, matching the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RoomCategory::Single => "single",
            RoomCategory::Double => "double",
            RoomCategory::Suite => "suite",
            RoomCategory::Bunk => "bunk",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Room
// =============================================================================

/// A bookable room.
///
/// `available` starts true and is flipped false exactly once by a successful
/// booking; no transition back exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// 1-based registration position, immutable.
    pub id: RoomId,

    /// Room class; decides allocation and occupancy.
    pub category: RoomCategory,

    /// Nightly base rate in cents, non-negative, immutable.
    pub base_rate_cents: i64,

    /// Whether the room can still be allocated.
    pub available: bool,
}

impl Room {
    /// Returns the nightly base rate as Money.
    #[inline]
    pub fn base_rate(&self) -> Money {
        Money::from_cents(self.base_rate_cents)
    }

    /// Maximum occupancy, from the room's category.
    #[inline]
    pub fn max_guests(&self) -> u8 {
        self.category.max_guests()
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Assigned sequentially at registration, never reused.
    pub id: CustomerId,

    /// Display name; at least 3 characters after trimming.
    pub name: String,

    /// National id: exactly 8 digits followed by one uppercase letter.
    pub national_id: String,

    /// Contact email in `local@domain.tld` shape.
    pub email: String,

    /// VIP flag. Starts as supplied at registration; flipped true by the
    /// booking ledger once the promotion threshold is exceeded, never
    /// flipped false automatically.
    pub is_vip: bool,
}

// =============================================================================
// Reservation
// =============================================================================

/// A recorded stay on one room.
///
/// Reservations are immutable once created and their per-room lists are
/// append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// 1-based position within the owning room's history.
    pub id: ReservationId,

    /// Customer who booked the stay.
    pub customer_id: CustomerId,

    /// Room the stay occupies.
    pub room_id: RoomId,

    /// First night of the stay.
    pub start: NaiveDate,

    /// Check-out date, strictly after `start`.
    pub end: NaiveDate,

    /// Final price in cents, discounts applied, frozen at booking time.
    pub price_cents: i64,
}

impl Reservation {
    /// Returns the final price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Number of nights: days between start and end.
    ///
    /// At least 1, given the `start < end` invariant enforced before
    /// creation.
    #[inline]
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_occupancy_table() {
        let occupancies: Vec<u8> = RoomCategory::ALL.iter().map(|c| c.max_guests()).collect();
        assert_eq!(occupancies, vec![1, 3, 4, 8]);
    }

    #[test]
    fn test_category_wire_names() {
        // The boundary rejects anything outside the closed set.
        assert_eq!(serde_json::to_string(&RoomCategory::Bunk).unwrap(), "\"bunk\"");
        let parsed: RoomCategory = serde_json::from_str("\"suite\"").unwrap();
        assert_eq!(parsed, RoomCategory::Suite);
        assert!(serde_json::from_str::<RoomCategory>("\"penthouse\"").is_err());
    }

    #[test]
    fn test_reservation_nights() {
        let reservation = Reservation {
            id: 1,
            customer_id: 1,
            room_id: 1,
            start: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 3, 17).unwrap(),
            price_cents: 0,
        };
        assert_eq!(reservation.nights(), 7);
    }

    #[test]
    fn test_room_rate_accessor() {
        let room = Room {
            id: 1,
            category: RoomCategory::Double,
            base_rate_cents: 80_00,
            available: true,
        };
        assert_eq!(room.base_rate(), Money::from_cents(80_00));
        assert_eq!(room.max_guests(), 3);
    }
}
