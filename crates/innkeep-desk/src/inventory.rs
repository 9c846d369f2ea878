//! # Room Inventory
//!
//! In-memory room store. Room ids are the 1-based registration positions,
//! so the backing `Vec` doubles as the id index. Allocation is
//! first-registered-first: `find_available` scans in insertion order, which
//! makes the tie-break deterministic.

use tracing::info;

use innkeep_core::validation::validate_rate_cents;
use innkeep_core::{BookingError, BookingResult, Money, Room, RoomCategory, RoomId, ValidationError};

/// Stores rooms and tracks per-room availability.
///
/// ## Invariants
/// - Room ids are `1..=len`, in registration order, immutable
/// - `available` flips true -> false exactly once, never back
#[derive(Debug, Default)]
pub struct RoomInventory {
    rooms: Vec<Room>,
}

impl RoomInventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a room of the given category.
    ///
    /// The base rate must be non-negative; the new room starts available.
    ///
    /// ## Returns
    /// The stored room, with its assigned id.
    pub fn register(
        &mut self,
        category: RoomCategory,
        base_rate: Money,
    ) -> Result<&Room, ValidationError> {
        validate_rate_cents(base_rate.cents())?;

        let id = self.rooms.len() as RoomId + 1;
        self.rooms.push(Room {
            id,
            category,
            base_rate_cents: base_rate.cents(),
            available: true,
        });
        info!(room_id = id, category = %category, rate = %base_rate, "room registered");

        Ok(&self.rooms[id as usize - 1])
    }

    /// Registers several rooms at once, in slice order.
    ///
    /// All rates are validated up front, so a rejected entry means nothing
    /// was registered.
    ///
    /// ## Returns
    /// The assigned ids, in the same order as the input.
    pub fn register_batch(
        &mut self,
        rooms: &[(RoomCategory, Money)],
    ) -> Result<Vec<RoomId>, ValidationError> {
        for (_, rate) in rooms {
            validate_rate_cents(rate.cents())?;
        }

        let mut ids = Vec::with_capacity(rooms.len());
        for (category, rate) in rooms {
            let room = self.register(*category, *rate)?;
            ids.push(room.id);
        }
        Ok(ids)
    }

    /// Finds the first-registered available room of the category.
    ///
    /// Pure query: the caller decides whether to claim the room via
    /// [`RoomInventory::mark_booked`].
    pub fn find_available(&self, category: RoomCategory) -> Option<&Room> {
        self.rooms
            .iter()
            .find(|room| room.category == category && room.available)
    }

    /// Marks a room as booked, flipping its availability exactly once.
    ///
    /// The defensive errors cannot occur through the booking flow, which
    /// only hands this method ids straight from
    /// [`RoomInventory::find_available`].
    pub fn mark_booked(&mut self, room_id: RoomId) -> BookingResult<()> {
        let room = room_id
            .checked_sub(1)
            .and_then(|index| self.rooms.get_mut(index as usize))
            .ok_or(BookingError::UnknownRoom(room_id))?;

        if !room.available {
            return Err(BookingError::AlreadyBooked(room_id));
        }

        room.available = false;
        info!(room_id, "room marked booked");
        Ok(())
    }

    /// Rooms currently available, in registration order.
    ///
    /// Lazy and restartable: each call starts a fresh scan.
    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter().filter(|room| room.available)
    }

    /// All rooms, in registration order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter()
    }

    /// Looks up a room by id.
    pub fn room(&self, room_id: RoomId) -> Option<&Room> {
        room_id
            .checked_sub(1)
            .and_then(|index| self.rooms.get(index as usize))
    }

    /// Number of registered rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// True iff no rooms are registered.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
