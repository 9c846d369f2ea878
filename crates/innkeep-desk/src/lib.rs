//! # innkeep-desk: Front Desk Layer
//!
//! The stateful layer of the booking engine. Everything mutable lives here,
//! in memory, for the lifetime of the process:
//!
//! - [`registry`] - customer store with validated registration and VIP flags
//! - [`inventory`] - room store with category allocation and availability
//! - [`ledger`] - reservation histories and the booking orchestration
//! - [`desk`] - the [`FrontDesk`] facade tying the three together
//! - [`state`] - shared-state wrapper serializing access for embedders
//! - [`commands`] - structured request/response dispatcher
//! - [`error`] - serializable boundary error
//!
//! All business rules (pricing, validation, thresholds) come from
//! `innkeep-core`; this crate sequences them and owns the data.
//!
//! ## Example
//!
//! ```rust
//! use innkeep_core::{Money, RoomCategory};
//! use innkeep_desk::desk::{FrontDesk, HotelInfo};
//!
//! let mut desk = FrontDesk::new(HotelInfo {
//!     name: "The Lookout".into(),
//!     address: "6 Harbour Row".into(),
//!     phone: "555-0123".into(),
//! });
//!
//! desk.register_room(RoomCategory::Double, Money::from_cents(80_00)).unwrap();
//! let guest = desk
//!     .register_customer("Daniela", "daniela@example.com", "12345678A", false)
//!     .unwrap();
//!
//! let start = chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
//! let end = chrono::NaiveDate::from_ymd_opt(2026, 9, 4).unwrap();
//! let room_id = desk.book(guest, RoomCategory::Double, start, end).unwrap();
//! assert_eq!(room_id, 1);
//! ```

pub mod commands;
pub mod desk;
pub mod error;
pub mod inventory;
pub mod ledger;
pub mod registry;
pub mod state;

pub use commands::{dispatch, Command, Reply};
pub use desk::{FrontDesk, HotelInfo};
pub use error::{ApiError, ErrorCode};
pub use state::DeskState;
