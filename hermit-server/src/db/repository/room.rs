//! Room Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Room, RoomCreate, RoomStatus, RoomUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct RoomRepository {
    base: BaseRepository,
}

impl RoomRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all rooms ordered by room number
    pub async fn find_all(&self) -> RepoResult<Vec<Room>> {
        let rooms: Vec<Room> = self
            .base
            .db()
            .query("SELECT * FROM room ORDER BY number")
            .await?
            .take(0)?;
        Ok(rooms)
    }

    /// Find room by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Room>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let room: Option<Room> = self.base.db().select(thing).await?;
        Ok(room)
    }

    /// Find room by room number
    pub async fn find_by_number(&self, number: &str) -> RepoResult<Option<Room>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM room WHERE number = $number LIMIT 1")
            .bind(("number", number.to_string()))
            .await?;
        let rooms: Vec<Room> = result.take(0)?;
        Ok(rooms.into_iter().next())
    }

    /// Create a new room (starts available and clean)
    pub async fn create(&self, data: RoomCreate) -> RepoResult<Room> {
        if self.find_by_number(&data.number).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Room '{}' already exists",
                data.number
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                "CREATE room SET \
                 number = $number, \
                 room_type = $room_type, \
                 floor = $floor, \
                 status = $status, \
                 is_clean = true, \
                 notes = $notes",
            )
            .bind(("number", data.number))
            .bind(("room_type", data.room_type))
            .bind(("floor", data.floor))
            .bind(("status", RoomStatus::Available.as_str()))
            .bind(("notes", data.notes))
            .await?;

        let created: Vec<Room> = result.take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create room".to_string()))
    }

    /// Update a room
    ///
    /// 手动构建 UPDATE 语句，避免 room_type 链接被序列化为字符串
    pub async fn update(&self, id: &str, data: RoomUpdate) -> RepoResult<Room> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Room {} not found", id)))?;

        if let Some(number) = &data.number
            && number != &existing.number
            && self.find_by_number(number).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Room '{}' already exists",
                number
            )));
        }

        let number = data.number.unwrap_or(existing.number);
        let room_type = data.room_type.unwrap_or(existing.room_type);
        let floor = data.floor.unwrap_or(existing.floor);
        let status = data.status.unwrap_or(existing.status);
        let is_clean = data.is_clean.unwrap_or(existing.is_clean);
        let notes = data.notes.or(existing.notes);

        self.base
            .db()
            .query(
                "UPDATE $thing SET \
                 number = $number, \
                 room_type = $room_type, \
                 floor = $floor, \
                 status = $status, \
                 is_clean = $is_clean, \
                 notes = $notes",
            )
            .bind(("thing", thing))
            .bind(("number", number))
            .bind(("room_type", room_type))
            .bind(("floor", floor))
            .bind(("status", status.as_str()))
            .bind(("is_clean", is_clean))
            .bind(("notes", notes))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Room {} not found", id)))
    }

    /// Hard delete a room
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
