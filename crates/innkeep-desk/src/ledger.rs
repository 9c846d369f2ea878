//! # Booking Ledger
//!
//! Owns every reservation, keyed by room, and orchestrates the booking
//! sequence: precondition checks, VIP promotion, price quotation, and the
//! availability flip, all under one mutable borrow so the check-then-claim
//! pair can never interleave with another booking.
//!
//! ## Room State Machine
//! `Available -> Booked`, terminal. No cancellation operation exists, so a
//! room booked for any date range is never offered again.

use std::collections::BTreeMap;

use chrono::{Months, NaiveDate, Utc};
use tracing::{debug, info};

use innkeep_core::{
    pricing, BookingError, BookingResult, CustomerId, Reservation, ReservationId, RoomCategory,
    RoomId, VIP_LOOKBACK_MONTHS, VIP_RESERVATION_THRESHOLD,
};

use crate::inventory::RoomInventory;
use crate::registry::CustomerRegistry;

/// Append-only record of reservations, indexed by room id.
#[derive(Debug, Default)]
pub struct BookingLedger {
    by_room: BTreeMap<RoomId, Vec<Reservation>>,
}

impl BookingLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Books an available room of the requested category, using today's
    /// date for the VIP lookback window.
    ///
    /// See [`BookingLedger::book_as_of`] for the full sequence.
    pub fn book(
        &mut self,
        registry: &mut CustomerRegistry,
        inventory: &mut RoomInventory,
        customer_id: CustomerId,
        category: RoomCategory,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BookingResult<RoomId> {
        self.book_as_of(
            registry,
            inventory,
            customer_id,
            category,
            start,
            end,
            Utc::now().date_naive(),
        )
    }

    /// Books an available room of the requested category, with an explicit
    /// booking date for the VIP lookback window.
    ///
    /// ## Sequence
    /// 1. Fail with `NoInventory` if no rooms are registered at all
    /// 2. Fail with `UnknownCustomer` if the customer id is not registered
    /// 3. Fail with `InvalidDateRange` unless `start < end`
    /// 4. Fail with `NoAvailability` if no room of the category is free
    /// 5. Count the customer's prior reservations, across all rooms, whose
    ///    stay-start falls strictly after `today - 12 months`; if the count
    ///    exceeds the promotion threshold and the customer is not yet VIP,
    ///    promote them. The count uses the history as it stands, before
    ///    this reservation is appended.
    /// 6. Quote the price from the room's base rate, the stay length, and
    ///    the VIP status after step 5
    /// 7. Append the reservation to the room's history and mark the room
    ///    booked
    /// 8. Return the booked room's id
    #[allow(clippy::too_many_arguments)]
    pub fn book_as_of(
        &mut self,
        registry: &mut CustomerRegistry,
        inventory: &mut RoomInventory,
        customer_id: CustomerId,
        category: RoomCategory,
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
    ) -> BookingResult<RoomId> {
        debug!(customer_id, category = %category, %start, %end, "booking requested");

        if inventory.is_empty() {
            return Err(BookingError::NoInventory);
        }

        let mut is_vip = registry
            .lookup(customer_id)
            .ok_or(BookingError::UnknownCustomer(customer_id))?
            .is_vip;

        if start >= end {
            return Err(BookingError::InvalidDateRange { start, end });
        }

        let (room_id, base_rate) = inventory
            .find_available(category)
            .map(|room| (room.id, room.base_rate()))
            .ok_or(BookingError::NoAvailability(category))?;

        // Promotion looks at the history before this reservation lands.
        let cutoff = today
            .checked_sub_months(Months::new(VIP_LOOKBACK_MONTHS))
            .unwrap_or(NaiveDate::MIN);
        let recent = self.reservation_count_since(customer_id, cutoff);
        if !is_vip && recent > VIP_RESERVATION_THRESHOLD {
            registry.promote_to_vip(customer_id);
            is_vip = true;
        }

        let nights = (end - start).num_days();
        let price = pricing::quote(base_rate, nights, is_vip);

        let history = self.by_room.entry(room_id).or_default();
        let reservation = Reservation {
            id: history.len() as ReservationId + 1,
            customer_id,
            room_id,
            start,
            end,
            price_cents: price.cents(),
        };
        history.push(reservation);
        inventory.mark_booked(room_id)?;

        info!(customer_id, room_id, nights, price = %price, "reservation recorded");
        Ok(room_id)
    }

    /// The room's reservation history, oldest first. Empty if none.
    pub fn reservations_for(&self, room_id: RoomId) -> &[Reservation] {
        self.by_room
            .get(&room_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Read-only snapshot of every reservation, keyed by room id in
    /// ascending order.
    pub fn all(&self) -> &BTreeMap<RoomId, Vec<Reservation>> {
        &self.by_room
    }

    /// Number of the customer's reservations whose stay-start falls
    /// strictly after `cutoff`, across all rooms.
    pub fn reservation_count_since(&self, customer_id: CustomerId, cutoff: NaiveDate) -> usize {
        self.by_room
            .values()
            .flatten()
            .filter(|r| r.customer_id == customer_id && r.start > cutoff)
            .count()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
