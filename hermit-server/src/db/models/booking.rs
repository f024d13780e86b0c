//! Booking Model

use super::serde_helpers;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Booking ID type
pub type BookingId = RecordId;

/// Booking lifecycle status
///
/// State machine:
///
/// ```text
/// pending ──→ confirmed ──→ checked_in ──→ checked_out
///    │            │
///    └──→ cancelled ←┘
/// ```
///
/// `checked_out` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    /// Whether this status blocks the room for overlapping date ranges.
    /// Pending bookings hold no inventory; cancelled/checked_out never block.
    pub fn blocks_room(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::CheckedIn)
    }

    /// Terminal states admit no further transition
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::CheckedOut | BookingStatus::Cancelled)
    }

    /// Legality of a direct status transition
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, CheckedIn)
                | (Confirmed, Cancelled)
                | (CheckedIn, CheckedOut)
        )
    }

    /// Status name as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::CheckedOut => "checked_out",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// Booking entity
///
/// `check_in`/`check_out` form a half-open interval `[check_in, check_out)`:
/// the checkout day is free for the next arrival.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<BookingId>,
    /// Human-readable booking number, unique (best-effort, see number generator)
    pub number: String,
    #[serde(with = "serde_helpers::record_id")]
    pub guest: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub room: RecordId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    /// nights × nightly rate, recomputed on every date/occupancy change
    pub total_amount: Decimal,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// Staff member who created the booking
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub created_by: Option<RecordId>,
    /// Unix millis
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub guest: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub room: RecordId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub created_by: Option<RecordId>,
}

/// Update booking payload — absent fields keep their current value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adults: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<u32>,
    /// Only pending→confirmed and pending/confirmed→cancelled are accepted
    /// here; check-in/check-out go through their dedicated operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// List filters for GET /api/bookings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    /// Room id ("room:xyz")
    pub room: Option<String>,
    /// Guest id ("guest:xyz")
    pub guest: Option<String>,
    /// Only bookings whose stay intersects [from, to)
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table_matches_state_machine() {
        use BookingStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(CheckedIn));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(CheckedIn.can_transition_to(CheckedOut));

        // No skips, no reversals
        assert!(!Pending.can_transition_to(CheckedIn));
        assert!(!CheckedIn.can_transition_to(Cancelled));
        assert!(!CheckedOut.can_transition_to(CheckedIn));
        assert!(!Cancelled.can_transition_to(Confirmed));
    }

    #[test]
    fn only_confirmed_and_checked_in_block() {
        use BookingStatus::*;
        assert!(Confirmed.blocks_room());
        assert!(CheckedIn.blocks_room());
        assert!(!Pending.blocks_room());
        assert!(!CheckedOut.blocks_room());
        assert!(!Cancelled.blocks_room());
    }
}
