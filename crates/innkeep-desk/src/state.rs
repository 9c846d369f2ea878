//! # Desk State
//!
//! Shared-state wrapper around [`FrontDesk`].
//!
//! The engine itself is single-threaded and synchronous. When embedded in a
//! concurrent host, the whole booking sequence must stay one critical
//! section per invocation; holding the mutex across a closure does exactly
//! that, so "find available room" can never interleave with "mark booked".

use std::sync::{Arc, Mutex};

use crate::desk::{FrontDesk, HotelInfo};

/// Shared handle to the front desk.
///
/// Uses `Arc<Mutex<FrontDesk>>`: one lock, held for the duration of each
/// operation, read or write.
#[derive(Debug, Clone)]
pub struct DeskState {
    desk: Arc<Mutex<FrontDesk>>,
}

impl DeskState {
    /// Opens a front desk for the given hotel and wraps it for sharing.
    pub fn new(info: HotelInfo) -> Self {
        DeskState {
            desk: Arc::new(Mutex::new(FrontDesk::new(info))),
        }
    }

    /// Executes a function with read access to the desk.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = state.with_desk(|desk| desk.customers().count());
    /// ```
    pub fn with_desk<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&FrontDesk) -> R,
    {
        let desk = self.desk.lock().expect("Desk mutex poisoned");
        f(&desk)
    }

    /// Executes a function with write access to the desk.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_desk_mut(|desk| desk.book(guest, category, start, end))?;
    /// ```
    pub fn with_desk_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut FrontDesk) -> R,
    {
        let mut desk = self.desk.lock().expect("Desk mutex poisoned");
        f(&mut desk)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
