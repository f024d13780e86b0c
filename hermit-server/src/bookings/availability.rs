//! Room Availability Checker
//!
//! Decides whether a candidate date range conflicts with existing bookings.
//! Read-only; the decision about what to do with the answer lives in the
//! lifecycle manager.

use crate::db::models::BookingStatus;
use crate::db::repository::{BookingRepository, RepoResult};
use chrono::NaiveDate;
use surrealdb::RecordId;

/// Half-open interval overlap: `[a_start, a_end)` vs `[b_start, b_end)`.
///
/// Back-to-back stays (one guest leaves the morning another arrives) do not
/// overlap.
pub fn overlaps(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    b_start < a_end && b_end > a_start
}

/// Availability checker over the booking repository
#[derive(Clone)]
pub struct AvailabilityChecker {
    bookings: BookingRepository,
}

impl AvailabilityChecker {
    pub fn new(bookings: BookingRepository) -> Self {
        Self { bookings }
    }

    /// `true` when no blocking booking (see [`BookingStatus::blocks_room`])
    /// overlaps `[check_in, check_out)` on the room. `exclude` drops the
    /// booking's own record from the scan when re-checking a date change.
    pub async fn is_available(
        &self,
        room: &RecordId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude: Option<&RecordId>,
    ) -> RepoResult<bool> {
        let blocking = self
            .bookings
            .find_blocking(room, check_in, check_out, exclude)
            .await?;
        debug_assert!(blocking.iter().all(|b| b.status.blocks_room()));
        Ok(blocking.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    #[test]
    fn contained_range_overlaps() {
        assert!(overlaps(d(6, 1), d(6, 4), d(6, 2), d(6, 3)));
    }

    #[test]
    fn partial_overlap_both_sides() {
        assert!(overlaps(d(6, 1), d(6, 4), d(6, 3), d(6, 6)));
        assert!(overlaps(d(6, 3), d(6, 6), d(6, 1), d(6, 4)));
    }

    #[test]
    fn identical_range_overlaps() {
        assert!(overlaps(d(6, 1), d(6, 4), d(6, 1), d(6, 4)));
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        // Checkout day == next check-in day: the room turns over same day
        assert!(!overlaps(d(6, 1), d(6, 4), d(6, 4), d(6, 7)));
        assert!(!overlaps(d(6, 4), d(6, 7), d(6, 1), d(6, 4)));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        assert!(!overlaps(d(6, 1), d(6, 4), d(6, 10), d(6, 12)));
    }
}
