//! Room Type Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{RoomType, RoomTypeCreate, RoomTypeUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "room_type";

#[derive(Clone)]
pub struct RoomTypeRepository {
    base: BaseRepository,
}

impl RoomTypeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<RoomType>> {
        let types: Vec<RoomType> = self
            .base
            .db()
            .query("SELECT * FROM room_type ORDER BY name")
            .await?
            .take(0)?;
        Ok(types)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<RoomType>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let room_type: Option<RoomType> = self.base.db().select(thing).await?;
        Ok(room_type)
    }

    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<RoomType>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM room_type WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let types: Vec<RoomType> = result.take(0)?;
        Ok(types.into_iter().next())
    }

    pub async fn create(&self, data: RoomTypeCreate) -> RepoResult<RoomType> {
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Room type '{}' already exists",
                data.name
            )));
        }

        let room_type = RoomType {
            id: None,
            name: data.name,
            base_price: data.base_price,
            max_occupancy: data.max_occupancy,
            amenities: data.amenities,
        };

        let created: Option<RoomType> = self.base.db().create(TABLE).content(room_type).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create room type".to_string()))
    }

    pub async fn update(&self, id: &str, data: RoomTypeUpdate) -> RepoResult<RoomType> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Room type {} not found", id)))?;

        if let Some(name) = &data.name
            && name != &existing.name
            && self.find_by_name(name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Room type '{}' already exists",
                name
            )));
        }

        let name = data.name.unwrap_or(existing.name);
        let base_price = data.base_price.unwrap_or(existing.base_price);
        let max_occupancy = data.max_occupancy.unwrap_or(existing.max_occupancy);
        let amenities = data.amenities.unwrap_or(existing.amenities);

        self.base
            .db()
            .query(
                "UPDATE $thing SET \
                 name = $name, \
                 base_price = $base_price, \
                 max_occupancy = $max_occupancy, \
                 amenities = $amenities",
            )
            .bind(("thing", thing))
            .bind(("name", name))
            .bind(("base_price", base_price))
            .bind(("max_occupancy", max_occupancy))
            .bind(("amenities", amenities))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Room type {} not found", id)))
    }

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
