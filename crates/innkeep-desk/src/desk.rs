//! # Front Desk Facade
//!
//! One aggregate tying the hotel's descriptive metadata to its three
//! subsystems. Callers (and the command dispatcher) talk to [`FrontDesk`];
//! the subsystems never reach around each other.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use innkeep_core::{
    BookingResult, Customer, CustomerId, Money, Reservation, Room, RoomCategory, RoomId,
    ValidationError,
};

use crate::inventory::RoomInventory;
use crate::ledger::BookingLedger;
use crate::registry::CustomerRegistry;

/// Descriptive hotel metadata.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// The hotel's front desk: metadata, customer registry, room inventory,
/// and booking ledger.
///
/// Single-threaded and synchronous; every operation runs to completion
/// before the next is accepted. Embedders needing shared access wrap this
/// in [`crate::state::DeskState`].
#[derive(Debug)]
pub struct FrontDesk {
    info: HotelInfo,
    registry: CustomerRegistry,
    inventory: RoomInventory,
    ledger: BookingLedger,
}

impl FrontDesk {
    /// Opens a front desk for a hotel with no rooms and no customers.
    pub fn new(info: HotelInfo) -> Self {
        FrontDesk {
            info,
            registry: CustomerRegistry::new(),
            inventory: RoomInventory::new(),
            ledger: BookingLedger::new(),
        }
    }

    /// The hotel's descriptive metadata.
    pub fn info(&self) -> &HotelInfo {
        &self.info
    }

    // -------------------------------------------------------------------------
    // Rooms
    // -------------------------------------------------------------------------

    /// Registers a room; returns its assigned id.
    pub fn register_room(
        &mut self,
        category: RoomCategory,
        base_rate: Money,
    ) -> Result<RoomId, ValidationError> {
        self.inventory.register(category, base_rate).map(|room| room.id)
    }

    /// Registers several rooms at once; returns their ids in input order.
    pub fn register_rooms(
        &mut self,
        rooms: &[(RoomCategory, Money)],
    ) -> Result<Vec<RoomId>, ValidationError> {
        self.inventory.register_batch(rooms)
    }

    /// Rooms currently available, in registration order.
    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.inventory.available_rooms()
    }

    /// All rooms, in registration order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.inventory.rooms()
    }

    /// Looks up a room by id.
    pub fn room(&self, room_id: RoomId) -> Option<&Room> {
        self.inventory.room(room_id)
    }

    /// True iff at least one room is registered.
    pub fn has_rooms(&self) -> bool {
        !self.inventory.is_empty()
    }

    // -------------------------------------------------------------------------
    // Customers
    // -------------------------------------------------------------------------

    /// Registers a customer; returns the assigned id.
    pub fn register_customer(
        &mut self,
        name: &str,
        email: &str,
        national_id: &str,
        is_vip: bool,
    ) -> Result<CustomerId, ValidationError> {
        self.registry
            .register(name, email, national_id, is_vip)
            .map(|customer| customer.id)
    }

    /// All customers, in id order.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.registry.customers()
    }

    /// Looks up a customer by id.
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.registry.lookup(id)
    }

    // -------------------------------------------------------------------------
    // Booking
    // -------------------------------------------------------------------------

    /// Books an available room of the requested category for the customer.
    ///
    /// The full sequence (precondition checks, VIP promotion, pricing,
    /// availability flip) is documented on
    /// [`BookingLedger::book_as_of`](crate::ledger::BookingLedger::book_as_of).
    pub fn book(
        &mut self,
        customer_id: CustomerId,
        category: RoomCategory,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BookingResult<RoomId> {
        self.ledger.book(
            &mut self.registry,
            &mut self.inventory,
            customer_id,
            category,
            start,
            end,
        )
    }

    /// The room's reservation history, oldest first.
    pub fn reservations_for(&self, room_id: RoomId) -> &[Reservation] {
        self.ledger.reservations_for(room_id)
    }

    /// Every reservation, keyed by room id in ascending order.
    pub fn all_reservations(&self) -> &BTreeMap<RoomId, Vec<Reservation>> {
        self.ledger.all()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
