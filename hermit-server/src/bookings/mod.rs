//! Booking Domain
//!
//! The reservation core: availability, pricing, the lifecycle manager and
//! the room state synchronizer. The API layer calls into
//! [`manager::BookingManager`]; everything else here is its collaborators.

pub mod availability;
pub mod manager;
pub mod number;
pub mod pricing;
pub mod room_sync;

pub use availability::AvailabilityChecker;
pub use manager::{BookingError, BookingManager, BookingResult, PaymentOutcome};
pub use room_sync::RoomStateSynchronizer;
