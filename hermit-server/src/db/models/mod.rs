//! Database Models

// Serde helpers
pub mod serde_helpers;

// Guests
pub mod guest;

// Inventory
pub mod room;
pub mod room_type;

// Bookings
pub mod booking;

// Re-exports
pub use booking::{
    Booking, BookingCreate, BookingFilter, BookingId, BookingStatus, BookingUpdate,
};
pub use guest::{Guest, GuestCreate, GuestId, GuestUpdate};
pub use room::{Room, RoomCreate, RoomId, RoomStatus, RoomUpdate};
pub use room_type::{RoomType, RoomTypeCreate, RoomTypeId, RoomTypeUpdate};
