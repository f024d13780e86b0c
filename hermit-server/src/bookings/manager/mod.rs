//! BookingManager - Booking lifecycle command processing
//!
//! Exclusive owner of booking-status writes and of the linked room's
//! occupancy status. Every mutation that touches a booking or its room goes
//! through here.
//!
//! # Operation Flow
//!
//! ```text
//! create / update / confirm
//!     ├─ 1. Validate input (dates, counts, capacity)
//!     ├─ 2. Acquire the per-room lock
//!     ├─ 3. Availability check (half-open overlap, blocking statuses only)
//!     ├─ 4. Write (validate-then-commit, no partial writes)
//!     └─ 5. Release lock, return result
//!
//! check_in / check_out
//!     ├─ 1. Validate transition legality (and check-in date)
//!     └─ 2. Booking + room written in one transaction (room_sync)
//! ```
//!
//! The per-room lock closes the check-then-act race: two concurrent creates
//! for overlapping ranges serialize, so the second one sees the first one's
//! write and fails `RoomUnavailable` instead of double-booking.

mod error;
pub use error::*;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use chrono_tz::Tz;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::availability::AvailabilityChecker;
use super::number;
use super::pricing;
use super::room_sync::RoomStateSynchronizer;
use crate::db::models::{
    Booking, BookingCreate, BookingFilter, BookingStatus, BookingUpdate, Room, RoomType,
};
use crate::db::repository::{
    BookingRepository, GuestRepository, RepoError, RoomRepository, RoomTypeRepository,
};
use crate::utils::time::{now_millis, today};
use crate::utils::validation::MAX_NOTE_LEN;

/// Attempts at generating a unique booking number before giving up
const NUMBER_RETRY_LIMIT: u32 = 3;

/// Outcome reported by the payment collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOutcome {
    Succeeded,
    Failed,
}

/// Per-room async locks, created on first use.
///
/// The registry only grows; with one entry per physical room that is bounded
/// by the hotel's size, so no eviction is needed.
#[derive(Debug, Default)]
struct RoomLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl RoomLocks {
    /// 获取房间锁（dashmap guard 不能跨 await 持有，先 clone 再等待）
    async fn acquire(&self, room: &RecordId) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(room.to_string())
            .or_default()
            .clone();
        lock.lock_owned().await
    }
}

/// Booking lifecycle manager
pub struct BookingManager {
    bookings: BookingRepository,
    rooms: RoomRepository,
    room_types: RoomTypeRepository,
    guests: GuestRepository,
    availability: AvailabilityChecker,
    room_sync: RoomStateSynchronizer,
    room_locks: RoomLocks,
    /// 业务时区
    tz: Tz,
}

impl std::fmt::Debug for BookingManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingManager").field("tz", &self.tz).finish()
    }
}

impl BookingManager {
    pub fn new(db: Surreal<Db>, tz: Tz) -> Self {
        let bookings = BookingRepository::new(db.clone());
        Self {
            availability: AvailabilityChecker::new(bookings.clone()),
            room_sync: RoomStateSynchronizer::new(db.clone()),
            bookings,
            rooms: RoomRepository::new(db.clone()),
            room_types: RoomTypeRepository::new(db.clone()),
            guests: GuestRepository::new(db),
            room_locks: RoomLocks::default(),
            tz,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub async fn get(&self, id: &str) -> BookingResult<Booking> {
        self.bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| BookingError::NotFound(format!("Booking {} not found", id)))
    }

    pub async fn list(&self, filter: &BookingFilter) -> BookingResult<Vec<Booking>> {
        Ok(self.bookings.find_all(filter).await?)
    }

    // ========================================================================
    // create
    // ========================================================================

    /// Create a booking in `pending` status.
    ///
    /// The room is left as-is: pending bookings hold no inventory and the
    /// room status only changes at check-in.
    pub async fn create(&self, data: BookingCreate) -> BookingResult<Booking> {
        // 1. Input validation
        if data.adults == 0 {
            return Err(BookingError::Validation(
                "At least one adult is required".to_string(),
            ));
        }
        if let Some(requests) = &data.special_requests
            && requests.len() > MAX_NOTE_LEN
        {
            return Err(BookingError::Validation(format!(
                "special_requests is too long (max {MAX_NOTE_LEN})"
            )));
        }
        let today = today(self.tz);
        if data.check_out <= data.check_in {
            return Err(BookingError::Validation(format!(
                "check_out ({}) must be after check_in ({})",
                data.check_out, data.check_in
            )));
        }
        if data.check_in < today {
            return Err(BookingError::Validation(format!(
                "check_in ({}) is in the past (today is {})",
                data.check_in, today
            )));
        }

        // 2. Resolve references
        if self
            .guests
            .find_by_id(&data.guest.to_string())
            .await?
            .is_none()
        {
            return Err(BookingError::NotFound(format!(
                "Guest {} not found",
                data.guest
            )));
        }
        let (room, room_type) = self.room_with_type(&data.room).await?;

        // 3. Capacity (saturating: absurd counts must fail, not wrap)
        let party = data.adults.saturating_add(data.children);
        if party > room_type.max_occupancy {
            return Err(BookingError::CapacityExceeded(format!(
                "{} guests exceed the {} limit of room type '{}'",
                party, room_type.max_occupancy, room_type.name
            )));
        }

        // 4. Availability under the room lock (check-then-act must serialize)
        let room_id = room_record_id(&room)?;
        let _guard = self.room_locks.acquire(&room_id).await;
        if !self
            .availability
            .is_available(&room_id, data.check_in, data.check_out, None)
            .await?
        {
            return Err(BookingError::RoomUnavailable(format!(
                "Room {} is booked for {} to {}",
                room.number, data.check_in, data.check_out
            )));
        }

        // 5. Price and persist
        let total_amount = pricing::total_for_stay(room_type.base_price, data.check_in, data.check_out);
        let now = now_millis();

        let mut attempt = 0;
        let booking = loop {
            let candidate = Booking {
                id: None,
                number: number::generate(self.tz),
                guest: data.guest.clone(),
                room: room_id.clone(),
                check_in: data.check_in,
                check_out: data.check_out,
                adults: data.adults,
                children: data.children,
                total_amount,
                status: BookingStatus::Pending,
                special_requests: data.special_requests.clone(),
                created_by: data.created_by.clone(),
                created_at: now,
                updated_at: now,
            };
            match self.bookings.create(candidate).await {
                Ok(b) => break b,
                // 号码撞上唯一索引：换个随机后缀重试
                Err(RepoError::Duplicate(_)) if attempt < NUMBER_RETRY_LIMIT => {
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        };

        tracing::info!(
            booking = %booking.number,
            room = %room.number,
            check_in = %booking.check_in,
            check_out = %booking.check_out,
            total = %booking.total_amount,
            "Booking created"
        );
        Ok(booking)
    }

    // ========================================================================
    // update
    // ========================================================================

    /// Modify a booking.
    ///
    /// Dates and occupancy re-run the create-time validations; a date change
    /// re-checks availability excluding the booking's own record and fails
    /// `RoomUnavailable` with the booking untouched. Total is recomputed
    /// fully from the effective dates and the room's current nightly rate.
    /// Status changes here are limited to confirm/cancel; check-in and
    /// check-out have their own operations.
    pub async fn update(&self, id: &str, data: BookingUpdate) -> BookingResult<Booking> {
        let booking = self.get(id).await?;
        if booking.status.is_terminal() {
            return Err(BookingError::IllegalOperation(format!(
                "Booking {} is {} and can no longer be modified",
                booking.number,
                booking.status.as_str()
            )));
        }
        if let Some(requests) = &data.special_requests
            && requests.len() > MAX_NOTE_LEN
        {
            return Err(BookingError::Validation(format!(
                "special_requests is too long (max {MAX_NOTE_LEN})"
            )));
        }

        // Effective values: absent fields keep their stored value
        let check_in = data.check_in.unwrap_or(booking.check_in);
        let check_out = data.check_out.unwrap_or(booking.check_out);
        let adults = data.adults.unwrap_or(booking.adults);
        let children = data.children.unwrap_or(booking.children);
        let dates_changed = check_in != booking.check_in || check_out != booking.check_out;
        let occupancy_changed = adults != booking.adults || children != booking.children;

        if adults == 0 {
            return Err(BookingError::Validation(
                "At least one adult is required".to_string(),
            ));
        }
        if dates_changed && check_out <= check_in {
            return Err(BookingError::Validation(format!(
                "check_out ({}) must be after check_in ({})",
                check_out, check_in
            )));
        }
        // Only a *moved* arrival date must not land in the past; extending
        // the departure of a stay that already started is fine.
        if check_in != booking.check_in {
            let today = today(self.tz);
            if check_in < today {
                return Err(BookingError::Validation(format!(
                    "check_in ({}) is in the past (today is {})",
                    check_in, today
                )));
            }
        }

        // Status change legality (only confirm/cancel may come through here)
        let next_status = match data.status {
            Some(next) if next != booking.status => {
                if matches!(next, BookingStatus::CheckedIn | BookingStatus::CheckedOut) {
                    return Err(BookingError::IllegalTransition(format!(
                        "Cannot move from {} to {} via update; use check-in/check-out",
                        booking.status.as_str(),
                        next.as_str()
                    )));
                }
                if !booking.status.can_transition_to(next) {
                    return Err(BookingError::IllegalTransition(format!(
                        "Cannot move from {} to {}",
                        booking.status.as_str(),
                        next.as_str()
                    )));
                }
                Some(next)
            }
            _ => None,
        };

        // Capacity against the room type's limit, with effective counts
        let (room, room_type) = self.room_with_type(&booking.room).await?;
        let party = adults.saturating_add(children);
        if party > room_type.max_occupancy {
            return Err(BookingError::CapacityExceeded(format!(
                "{} guests exceed the {} limit of room type '{}'",
                party, room_type.max_occupancy, room_type.name
            )));
        }

        let booking_id = booking_record_id(&booking)?;
        let room_id = room_record_id(&room)?;
        let _guard = self.room_locks.acquire(&room_id).await;

        // Availability re-check, excluding this booking's own record.
        // Needed when the dates move, and when the booking starts blocking
        // (pending → confirmed).
        let will_block = next_status.map(|s| s.blocks_room()).unwrap_or(false);
        if (dates_changed || will_block)
            && !self
                .availability
                .is_available(&room_id, check_in, check_out, Some(&booking_id))
                .await?
        {
            return Err(BookingError::RoomUnavailable(format!(
                "Room {} is booked for {} to {}",
                room.number, check_in, check_out
            )));
        }

        // All validation passed — commit in one statement, guarded on the
        // status observed above: a concurrent transition (e.g. a cancel)
        // makes the guard miss and nothing is written. Total recomputed
        // fully, never incrementally.
        let total_amount = if dates_changed || occupancy_changed {
            pricing::total_for_stay(room_type.base_price, check_in, check_out)
        } else {
            booking.total_amount
        };
        let special_requests = data.special_requests.or(booking.special_requests);

        let updated = self
            .bookings
            .update_stay(
                &booking_id,
                booking.status,
                next_status.unwrap_or(booking.status),
                check_in,
                check_out,
                adults,
                children,
                total_amount,
                special_requests,
                now_millis(),
            )
            .await?
            .ok_or_else(|| {
                BookingError::IllegalTransition(format!(
                    "Booking {} changed status concurrently",
                    booking.number
                ))
            })?;

        tracing::info!(booking = %updated.number, "Booking updated");
        Ok(updated)
    }

    // ========================================================================
    // Status transitions
    // ========================================================================

    /// `pending → confirmed` (manual staff action or successful payment).
    ///
    /// Pending bookings hold no inventory, so two of them can coexist on the
    /// same dates; confirmation is the moment the room is actually claimed
    /// and therefore re-checks availability under the room lock.
    pub async fn confirm(&self, id: &str) -> BookingResult<Booking> {
        let booking = self.get(id).await?;
        if !booking.status.can_transition_to(BookingStatus::Confirmed) {
            return Err(BookingError::IllegalTransition(format!(
                "Cannot confirm booking {} from {}",
                booking.number,
                booking.status.as_str()
            )));
        }

        let booking_id = booking_record_id(&booking)?;
        let _guard = self.room_locks.acquire(&booking.room).await;

        if !self
            .availability
            .is_available(&booking.room, booking.check_in, booking.check_out, Some(&booking_id))
            .await?
        {
            return Err(BookingError::RoomUnavailable(format!(
                "Room is no longer free for {} to {}",
                booking.check_in, booking.check_out
            )));
        }

        let confirmed = self
            .bookings
            .transition(&booking_id, BookingStatus::Pending, BookingStatus::Confirmed, now_millis())
            .await?
            .ok_or_else(|| {
                BookingError::IllegalTransition(format!(
                    "Booking {} changed status concurrently",
                    booking.number
                ))
            })?;

        tracing::info!(booking = %confirmed.number, "Booking confirmed");
        Ok(confirmed)
    }

    /// Check a guest in. Legal only from `confirmed`, and only once the
    /// stored check-in date has arrived in the business timezone. Booking
    /// and room are written atomically.
    pub async fn check_in(&self, id: &str) -> BookingResult<Booking> {
        let booking = self.get(id).await?;
        if !booking.status.can_transition_to(BookingStatus::CheckedIn) {
            return Err(BookingError::IllegalTransition(format!(
                "Cannot check in booking {} from {}",
                booking.number,
                booking.status.as_str()
            )));
        }
        let today = today(self.tz);
        if today < booking.check_in {
            return Err(BookingError::TooEarly(format!(
                "Booking {} starts {}; today is {}",
                booking.number, booking.check_in, today
            )));
        }

        let booking_id = booking_record_id(&booking)?;
        self.room_sync
            .apply_check_in(&booking_id, &booking.room, now_millis())
            .await?;

        tracing::info!(booking = %booking.number, room = %booking.room, "Guest checked in");
        self.get(id).await
    }

    /// Check a guest out. Legal only from `checked_in`. The room returns to
    /// `available` unless staff moved it to maintenance/cleaning meanwhile,
    /// or another booking on the room is still checked in.
    pub async fn check_out(&self, id: &str) -> BookingResult<Booking> {
        let booking = self.get(id).await?;
        if !booking.status.can_transition_to(BookingStatus::CheckedOut) {
            return Err(BookingError::IllegalTransition(format!(
                "Cannot check out booking {} from {}",
                booking.number,
                booking.status.as_str()
            )));
        }

        let booking_id = booking_record_id(&booking)?;
        self.room_sync
            .apply_check_out(&booking_id, &booking.room, now_millis())
            .await?;

        tracing::info!(booking = %booking.number, room = %booking.room, "Guest checked out");
        self.get(id).await
    }

    /// Cancel a booking (from `pending` or `confirmed`).
    ///
    /// Cancellation is a status update so the record stays for audit; actual
    /// removal goes through [`BookingManager::delete`].
    pub async fn cancel(&self, id: &str) -> BookingResult<Booking> {
        let booking = self.get(id).await?;
        if !booking.status.can_transition_to(BookingStatus::Cancelled) {
            return Err(BookingError::IllegalTransition(format!(
                "Cannot cancel booking {} from {}",
                booking.number,
                booking.status.as_str()
            )));
        }

        let booking_id = booking_record_id(&booking)?;
        let cancelled = self
            .bookings
            .transition(&booking_id, booking.status, BookingStatus::Cancelled, now_millis())
            .await?
            .ok_or_else(|| {
                BookingError::IllegalTransition(format!(
                    "Booking {} changed status concurrently",
                    booking.number
                ))
            })?;

        tracing::info!(booking = %cancelled.number, "Booking cancelled");
        Ok(cancelled)
    }

    /// Delete a booking record. Permitted only while `pending` or
    /// `cancelled` — active bookings must be cancelled first, not deleted,
    /// so the audit trail survives.
    pub async fn delete(&self, id: &str) -> BookingResult<()> {
        let booking = self.get(id).await?;
        if !matches!(
            booking.status,
            BookingStatus::Pending | BookingStatus::Cancelled
        ) {
            return Err(BookingError::IllegalOperation(format!(
                "Booking {} is {}; cancel it before deleting",
                booking.number,
                booking.status.as_str()
            )));
        }

        let booking_id = booking_record_id(&booking)?;
        self.bookings.delete(&booking_id).await?;
        tracing::info!(booking = %booking.number, "Booking deleted");
        Ok(())
    }

    /// Payment reconciliation entry point.
    ///
    /// `succeeded` advances `pending → confirmed`. `failed` leaves the
    /// booking pending — whether to cancel is the payment collaborator's
    /// policy, invoked through the regular cancel operation.
    pub async fn payment_outcome(
        &self,
        id: &str,
        outcome: PaymentOutcome,
    ) -> BookingResult<Booking> {
        match outcome {
            PaymentOutcome::Succeeded => self.confirm(id).await,
            PaymentOutcome::Failed => {
                let booking = self.get(id).await?;
                tracing::warn!(
                    booking = %booking.number,
                    "Payment failed, booking left pending"
                );
                Ok(booking)
            }
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    async fn room_with_type(&self, room: &RecordId) -> BookingResult<(Room, RoomType)> {
        let room = self
            .rooms
            .find_by_id(&room.to_string())
            .await?
            .ok_or_else(|| BookingError::NotFound(format!("Room {} not found", room)))?;
        let room_type = self
            .room_types
            .find_by_id(&room.room_type.to_string())
            .await?
            .ok_or_else(|| {
                BookingError::Database(format!(
                    "Room {} references missing room type {}",
                    room.number, room.room_type
                ))
            })?;
        Ok((room, room_type))
    }
}

fn booking_record_id(booking: &Booking) -> BookingResult<RecordId> {
    booking
        .id
        .clone()
        .ok_or_else(|| BookingError::Database("Booking record has no id".to_string()))
}

fn room_record_id(room: &Room) -> BookingResult<RecordId> {
    room.id
        .clone()
        .ok_or_else(|| BookingError::Database("Room record has no id".to_string()))
}
