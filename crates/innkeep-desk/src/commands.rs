//! # Command Dispatcher
//!
//! Structured request/response surface replacing an interactive menu loop:
//! one [`Command`] in, one [`Reply`] or [`ApiError`] out, no process-wide
//! input state.
//!
//! ## Wire Shape
//! Commands are tagged by `type`, with snake_case command names and
//! camelCase fields:
//! ```json
//! { "type": "book", "customerId": 1, "category": "double",
//!   "start": "2026-09-01", "end": "2026-09-04" }
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use innkeep_core::{
    Customer, CustomerId, Money, Reservation, ReservationId, Room, RoomCategory, RoomId,
};

use crate::desk::HotelInfo;
use crate::error::ApiError;
use crate::state::DeskState;

// =============================================================================
// Requests
// =============================================================================

/// A structured request against the front desk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Command {
    /// Register a room of a category at a nightly base rate.
    RegisterRoom {
        category: RoomCategory,
        base_rate_cents: i64,
    },
    /// Register a customer with validated identity fields.
    RegisterCustomer {
        name: String,
        email: String,
        national_id: String,
        is_vip: bool,
    },
    /// Reserve an available room of the category for the date range.
    Book {
        customer_id: CustomerId,
        category: RoomCategory,
        start: NaiveDate,
        end: NaiveDate,
    },
    /// List rooms currently available.
    ListAvailableRooms,
    /// List every reservation, grouped by room.
    ListReservations,
    /// List registered customers.
    ListCustomers,
    /// Return the hotel's descriptive metadata.
    HotelInfo,
}

// =============================================================================
// Response DTOs
// =============================================================================

/// A room, as reported to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    pub id: RoomId,
    pub category: RoomCategory,
    pub base_rate_cents: i64,
    pub max_guests: u8,
    pub available: bool,
}

impl From<&Room> for RoomView {
    fn from(room: &Room) -> Self {
        RoomView {
            id: room.id,
            category: room.category,
            base_rate_cents: room.base_rate_cents,
            max_guests: room.max_guests(),
            available: room.available,
        }
    }
}

/// A customer, as reported to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub id: CustomerId,
    pub name: String,
    pub national_id: String,
    pub is_vip: bool,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        CustomerView {
            id: customer.id,
            name: customer.name.clone(),
            national_id: customer.national_id.clone(),
            is_vip: customer.is_vip,
        }
    }
}

/// A reservation, as reported to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationView {
    pub reservation_id: ReservationId,
    pub customer_id: CustomerId,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub price_cents: i64,
}

impl From<&Reservation> for ReservationView {
    fn from(reservation: &Reservation) -> Self {
        ReservationView {
            reservation_id: reservation.id,
            customer_id: reservation.customer_id,
            start: reservation.start,
            end: reservation.end,
            price_cents: reservation.price_cents,
        }
    }
}

/// A structured response from the front desk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Reply {
    RoomRegistered { room_id: RoomId },
    CustomerRegistered { customer_id: CustomerId },
    Booked { room_id: RoomId },
    AvailableRooms { rooms: Vec<RoomView> },
    Reservations { by_room: BTreeMap<RoomId, Vec<ReservationView>> },
    Customers { customers: Vec<CustomerView> },
    HotelInfo { info: HotelInfo },
}

// =============================================================================
// Dispatch
// =============================================================================

/// Executes one command against the shared desk state.
///
/// Mutating commands hold the desk lock for their whole sequence, so a
/// booking's availability check and claim can never interleave with another
/// caller's.
pub fn dispatch(state: &DeskState, command: Command) -> Result<Reply, ApiError> {
    match command {
        Command::RegisterRoom {
            category,
            base_rate_cents,
        } => {
            debug!(category = %category, base_rate_cents, "register_room command");
            let room_id = state.with_desk_mut(|desk| {
                desk.register_room(category, Money::from_cents(base_rate_cents))
            })?;
            Ok(Reply::RoomRegistered { room_id })
        }

        Command::RegisterCustomer {
            name,
            email,
            national_id,
            is_vip,
        } => {
            debug!(name = %name, is_vip, "register_customer command");
            let customer_id = state
                .with_desk_mut(|desk| desk.register_customer(&name, &email, &national_id, is_vip))?;
            Ok(Reply::CustomerRegistered { customer_id })
        }

        Command::Book {
            customer_id,
            category,
            start,
            end,
        } => {
            debug!(customer_id, category = %category, %start, %end, "book command");
            let room_id =
                state.with_desk_mut(|desk| desk.book(customer_id, category, start, end))?;
            Ok(Reply::Booked { room_id })
        }

        Command::ListAvailableRooms => {
            debug!("list_available_rooms command");
            let rooms =
                state.with_desk(|desk| desk.available_rooms().map(RoomView::from).collect());
            Ok(Reply::AvailableRooms { rooms })
        }

        Command::ListReservations => {
            debug!("list_reservations command");
            let by_room = state.with_desk(|desk| {
                desk.all_reservations()
                    .iter()
                    .map(|(room_id, reservations)| {
                        (*room_id, reservations.iter().map(ReservationView::from).collect())
                    })
                    .collect()
            });
            Ok(Reply::Reservations { by_room })
        }

        Command::ListCustomers => {
            debug!("list_customers command");
            let customers =
                state.with_desk(|desk| desk.customers().map(CustomerView::from).collect());
            Ok(Reply::Customers { customers })
        }

        Command::HotelInfo => {
            debug!("hotel_info command");
            let info = state.with_desk(|desk| desk.info().clone());
            Ok(Reply::HotelInfo { info })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn state() -> DeskState {
        DeskState::new(HotelInfo {
            name: "The Lookout".into(),
            address: "6 Harbour Row".into(),
            phone: "555-0123".into(),
        })
    }

    fn register_double(state: &DeskState) {
        dispatch(
            state,
            Command::RegisterRoom {
                category: RoomCategory::Double,
                base_rate_cents: 80_00,
            },
        )
        .unwrap();
    }

    fn register_guest(state: &DeskState) -> CustomerId {
        match dispatch(
            state,
            Command::RegisterCustomer {
                name: "Daniela".into(),
                email: "daniela@example.com".into(),
                national_id: "12345678A".into(),
                is_vip: false,
            },
        )
        .unwrap()
        {
            Reply::CustomerRegistered { customer_id } => customer_id,
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_booking_conversation() {
        let state = state();
        register_double(&state);
        let guest = register_guest(&state);

        let reply = dispatch(
            &state,
            Command::Book {
                customer_id: guest,
                category: RoomCategory::Double,
                start: date(2026, 9, 1),
                end: date(2026, 9, 4),
            },
        )
        .unwrap();
        assert!(matches!(reply, Reply::Booked { room_id: 1 }));

        // The booked room left the availability listing...
        let reply = dispatch(&state, Command::ListAvailableRooms).unwrap();
        match reply {
            Reply::AvailableRooms { rooms } => assert!(rooms.is_empty()),
            other => panic!("unexpected reply: {:?}", other),
        }

        // ...and shows up in the reservation report with its price.
        let reply = dispatch(&state, Command::ListReservations).unwrap();
        match reply {
            Reply::Reservations { by_room } => {
                let history = &by_room[&1];
                assert_eq!(history.len(), 1);
                assert_eq!(history[0].reservation_id, 1);
                assert_eq!(history[0].price_cents, 240_00);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_booking_errors_surface_as_codes() {
        let state = state();

        // No rooms at all
        let err = dispatch(
            &state,
            Command::Book {
                customer_id: 1,
                category: RoomCategory::Single,
                start: date(2026, 9, 1),
                end: date(2026, 9, 2),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NoInventory);

        register_double(&state);

        // Unknown customer
        let err = dispatch(
            &state,
            Command::Book {
                customer_id: 42,
                category: RoomCategory::Double,
                start: date(2026, 9, 1),
                end: date(2026, 9, 2),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let guest = register_guest(&state);

        // Inverted dates
        let err = dispatch(
            &state,
            Command::Book {
                customer_id: guest,
                category: RoomCategory::Double,
                start: date(2026, 9, 4),
                end: date(2026, 9, 1),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDateRange);

        // Wrong category
        let err = dispatch(
            &state,
            Command::Book {
                customer_id: guest,
                category: RoomCategory::Suite,
                start: date(2026, 9, 1),
                end: date(2026, 9, 2),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NoAvailability);
    }

    #[test]
    fn test_rejected_registration_lists_nothing() {
        let state = state();

        let err = dispatch(
            &state,
            Command::RegisterCustomer {
                name: "Al".into(),
                email: "al@example.com".into(),
                national_id: "12345678A".into(),
                is_vip: false,
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let reply = dispatch(&state, Command::ListCustomers).unwrap();
        match reply {
            Reply::Customers { customers } => assert!(customers.is_empty()),
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_command_wire_shape() {
        let json = r#"{
            "type": "book",
            "customerId": 7,
            "category": "bunk",
            "start": "2026-09-01",
            "end": "2026-09-04"
        }"#;
        let command: Command = serde_json::from_str(json).unwrap();
        assert!(matches!(
            command,
            Command::Book {
                customer_id: 7,
                category: RoomCategory::Bunk,
                ..
            }
        ));

        // Unknown categories are rejected at the boundary, not coerced.
        let json = r#"{ "type": "register_room", "category": "penthouse", "baseRateCents": 1 }"#;
        assert!(serde_json::from_str::<Command>(json).is_err());

        let reply = Reply::Booked { room_id: 3 };
        assert_eq!(
            serde_json::to_string(&reply).unwrap(),
            r#"{"type":"booked","roomId":3}"#
        );
    }

    #[test]
    fn test_hotel_info_reply() {
        let reply = dispatch(&state(), Command::HotelInfo).unwrap();
        match reply {
            Reply::HotelInfo { info } => assert_eq!(info.name, "The Lookout"),
            other => panic!("unexpected reply: {:?}", other),
        }
    }
}
