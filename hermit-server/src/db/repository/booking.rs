//! Booking Repository
//!
//! Read/write access to booking records. Status transitions and the paired
//! room-status writes are *not* here — those belong to the lifecycle manager
//! and the room state synchronizer.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Booking, BookingFilter, BookingStatus};
use chrono::NaiveDate;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "booking";

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub fn db(&self) -> &Surreal<Db> {
        self.base.db()
    }

    /// List bookings matching the filter, earliest arrival first
    pub async fn find_all(&self, filter: &BookingFilter) -> RepoResult<Vec<Booking>> {
        let mut conditions: Vec<&str> = Vec::new();
        if filter.status.is_some() {
            conditions.push("status = $status");
        }
        if filter.room.is_some() {
            conditions.push("room = $room");
        }
        if filter.guest.is_some() {
            conditions.push("guest = $guest");
        }
        // 日期过滤: 半开区间相交
        if filter.from.is_some() {
            conditions.push("check_out > $from");
        }
        if filter.to.is_some() {
            conditions.push("check_in < $to");
        }

        let mut sql = format!("SELECT * FROM {TABLE}");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY check_in");

        let mut query = self.base.db().query(sql);
        if let Some(status) = filter.status {
            query = query.bind(("status", status.as_str()));
        }
        if let Some(room) = &filter.room {
            let room: RecordId = room
                .parse()
                .map_err(|_| RepoError::Validation(format!("Invalid room ID: {}", room)))?;
            query = query.bind(("room", room));
        }
        if let Some(guest) = &filter.guest {
            let guest: RecordId = guest
                .parse()
                .map_err(|_| RepoError::Validation(format!("Invalid guest ID: {}", guest)))?;
            query = query.bind(("guest", guest));
        }
        if let Some(from) = filter.from {
            query = query.bind(("from", from));
        }
        if let Some(to) = filter.to {
            query = query.bind(("to", to));
        }

        let bookings: Vec<Booking> = query.await?.take(0)?;
        Ok(bookings)
    }

    /// Find booking by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Booking>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let booking: Option<Booking> = self.base.db().select(thing).await?;
        Ok(booking)
    }

    /// Find booking by its human-readable number
    pub async fn find_by_number(&self, number: &str) -> RepoResult<Option<Booking>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM booking WHERE number = $number LIMIT 1")
            .bind(("number", number.to_string()))
            .await?;
        let bookings: Vec<Booking> = result.take(0)?;
        Ok(bookings.into_iter().next())
    }

    /// Blocking bookings overlapping `[check_in, check_out)` on a room.
    ///
    /// Half-open semantics: `b.check_in < check_out AND b.check_out > check_in`.
    /// Only `confirmed`/`checked_in` hold inventory. When re-checking for a
    /// date change, the booking's own record is excluded.
    pub async fn find_blocking(
        &self,
        room: &RecordId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude: Option<&RecordId>,
    ) -> RepoResult<Vec<Booking>> {
        let mut sql = String::from(
            "SELECT * FROM booking \
             WHERE room = $room \
             AND status IN ['confirmed', 'checked_in'] \
             AND check_in < $check_out \
             AND check_out > $check_in",
        );
        if exclude.is_some() {
            sql.push_str(" AND id != $exclude");
        }

        let mut query = self
            .base
            .db()
            .query(sql)
            .bind(("room", room.clone()))
            .bind(("check_in", check_in))
            .bind(("check_out", check_out));
        if let Some(exclude) = exclude {
            query = query.bind(("exclude", exclude.clone()));
        }

        let bookings: Vec<Booking> = query.await?.take(0)?;
        Ok(bookings)
    }

    /// Count non-terminal bookings on a room (guards room deletion)
    pub async fn count_open_for_room(&self, room: &RecordId) -> RepoResult<usize> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM booking \
                 WHERE room = $room AND status IN ['pending', 'confirmed', 'checked_in']",
            )
            .bind(("room", room.clone()))
            .await?;
        let bookings: Vec<Booking> = result.take(0)?;
        Ok(bookings.len())
    }

    /// Insert a new booking record
    ///
    /// 手动构建 CREATE 语句，避免 guest/room 链接被序列化为字符串
    pub async fn create(&self, booking: Booking) -> RepoResult<Booking> {
        let mut result = self
            .base
            .db()
            .query(
                "CREATE booking SET \
                 number = $number, \
                 guest = $guest, \
                 room = $room, \
                 check_in = $check_in, \
                 check_out = $check_out, \
                 adults = $adults, \
                 children = $children, \
                 total_amount = $total_amount, \
                 status = $status, \
                 special_requests = $special_requests, \
                 created_by = $created_by, \
                 created_at = $created_at, \
                 updated_at = $updated_at",
            )
            .bind(("number", booking.number))
            .bind(("guest", booking.guest))
            .bind(("room", booking.room))
            .bind(("check_in", booking.check_in))
            .bind(("check_out", booking.check_out))
            .bind(("adults", booking.adults))
            .bind(("children", booking.children))
            .bind(("total_amount", booking.total_amount))
            .bind(("status", booking.status))
            .bind(("special_requests", booking.special_requests))
            .bind(("created_by", booking.created_by))
            .bind(("created_at", booking.created_at))
            .bind(("updated_at", booking.updated_at))
            .await?;

        let created: Vec<Booking> = result.take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create booking".to_string()))
    }

    /// Persist a modified stay (dates, occupancy, recomputed total, requests)
    /// together with its (possibly unchanged) status, in one statement.
    ///
    /// Guarded on the status the manager observed: when a concurrent
    /// transition got there first the guard misses and *nothing* is written —
    /// stay fields and status always land together. Returns `None` on a miss.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_stay(
        &self,
        id: &RecordId,
        from: BookingStatus,
        to: BookingStatus,
        check_in: NaiveDate,
        check_out: NaiveDate,
        adults: u32,
        children: u32,
        total_amount: rust_decimal::Decimal,
        special_requests: Option<String>,
        updated_at: i64,
    ) -> RepoResult<Option<Booking>> {
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $thing SET \
                 check_in = $check_in, \
                 check_out = $check_out, \
                 adults = $adults, \
                 children = $children, \
                 total_amount = $total_amount, \
                 special_requests = $special_requests, \
                 status = $to, \
                 updated_at = $updated_at \
                 WHERE status = $from",
            )
            .bind(("thing", id.clone()))
            .bind(("check_in", check_in))
            .bind(("check_out", check_out))
            .bind(("adults", adults))
            .bind(("children", children))
            .bind(("total_amount", total_amount))
            .bind(("special_requests", special_requests))
            .bind(("from", from.as_str()))
            .bind(("to", to.as_str()))
            .bind(("updated_at", updated_at))
            .await?;

        let updated: Vec<Booking> = result.take(0)?;
        Ok(updated.into_iter().next())
    }

    /// Guarded status transition: applies only while the stored status still
    /// matches `from`. Returns `None` when the guard misses (concurrent
    /// transition), leaving the record untouched.
    pub async fn transition(
        &self,
        id: &RecordId,
        from: BookingStatus,
        to: BookingStatus,
        updated_at: i64,
    ) -> RepoResult<Option<Booking>> {
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $thing SET status = $to, updated_at = $updated_at \
                 WHERE status = $from",
            )
            .bind(("thing", id.clone()))
            .bind(("from", from.as_str()))
            .bind(("to", to.as_str()))
            .bind(("updated_at", updated_at))
            .await?;

        let updated: Vec<Booking> = result.take(0)?;
        Ok(updated.into_iter().next())
    }

    /// Hard delete a booking record
    pub async fn delete(&self, id: &RecordId) -> RepoResult<bool> {
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", id.clone()))
            .await?;
        Ok(true)
    }
}
