//! Room State Synchronizer
//!
//! Mirrors booking-status transitions into room occupancy. Check-in and
//! check-out each touch two records (booking + room); both writes run inside
//! a single SurrealQL transaction so readers never observe a booking that
//! says checked-in while the room still shows available, or the reverse.
//!
//! `maintenance`/`cleaning` are staff-owned room states and are never
//! touched here: on check-out the room returns to `available` only if it is
//! currently `occupied`.

use crate::db::repository::RepoResult;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct RoomStateSynchronizer {
    db: Surreal<Db>,
}

impl RoomStateSynchronizer {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    /// booking → checked_in, room → occupied, atomically.
    ///
    /// The status guard re-checks `confirmed` inside the transaction; if a
    /// concurrent transition got there first the `THROW` aborts and rolls
    /// back both writes (surfaced as `RepoError::Conflict`).
    pub async fn apply_check_in(
        &self,
        booking: &RecordId,
        room: &RecordId,
        updated_at: i64,
    ) -> RepoResult<()> {
        self.db
            .query(
                "BEGIN TRANSACTION;
                 LET $b = (UPDATE $booking SET status = 'checked_in', updated_at = $updated_at \
                           WHERE status = 'confirmed');
                 IF array::len($b) == 0 { THROW 'conflict: booking is no longer confirmed' };
                 UPDATE $room SET status = 'occupied', is_clean = false;
                 COMMIT TRANSACTION;",
            )
            .bind(("booking", booking.clone()))
            .bind(("room", room.clone()))
            .bind(("updated_at", updated_at))
            .await?
            .check()?;
        Ok(())
    }

    /// booking → checked_out, room → available, atomically.
    ///
    /// The room write is itself guarded on `occupied` so a staff-set
    /// maintenance/cleaning state survives the checkout. It also skips the
    /// room entirely while another booking on it is still `checked_in`
    /// (late checkout overlapping a same-day arrival).
    pub async fn apply_check_out(
        &self,
        booking: &RecordId,
        room: &RecordId,
        updated_at: i64,
    ) -> RepoResult<()> {
        self.db
            .query(
                "BEGIN TRANSACTION;
                 LET $b = (UPDATE $booking SET status = 'checked_out', updated_at = $updated_at \
                           WHERE status = 'checked_in');
                 IF array::len($b) == 0 { THROW 'conflict: booking is not checked in' };
                 LET $still = (SELECT id FROM booking WHERE room = $room AND status = 'checked_in');
                 IF array::len($still) == 0 {
                     UPDATE $room SET status = 'available' WHERE status = 'occupied';
                 };
                 COMMIT TRANSACTION;",
            )
            .bind(("booking", booking.clone()))
            .bind(("room", room.clone()))
            .bind(("updated_at", updated_at))
            .await?
            .check()?;
        Ok(())
    }
}
