//! Guest Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Guest, GuestCreate, GuestUpdate};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "guest";

#[derive(Clone)]
pub struct GuestRepository {
    base: BaseRepository,
}

impl GuestRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Guest>> {
        let guests: Vec<Guest> = self
            .base
            .db()
            .query("SELECT * FROM guest ORDER BY name")
            .await?
            .take(0)?;
        Ok(guests)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Guest>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let guest: Option<Guest> = self.base.db().select(thing).await?;
        Ok(guest)
    }

    /// Case-insensitive name search for the front desk
    pub async fn search_by_name(&self, name: &str) -> RepoResult<Vec<Guest>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM guest \
                 WHERE string::lowercase(name) CONTAINS string::lowercase($name) \
                 ORDER BY name",
            )
            .bind(("name", name.to_string()))
            .await?;
        let guests: Vec<Guest> = result.take(0)?;
        Ok(guests)
    }

    pub async fn create(&self, data: GuestCreate) -> RepoResult<Guest> {
        let guest = Guest {
            id: None,
            name: data.name,
            email: data.email,
            phone: data.phone,
            id_document: data.id_document,
            notes: data.notes,
            created_at: now_millis(),
        };

        let created: Option<Guest> = self.base.db().create(TABLE).content(guest).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create guest".to_string()))
    }

    pub async fn update(&self, id: &str, data: GuestUpdate) -> RepoResult<Guest> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Guest {} not found", id)))?;

        let name = data.name.unwrap_or(existing.name);
        let email = data.email.or(existing.email);
        let phone = data.phone.or(existing.phone);
        let id_document = data.id_document.or(existing.id_document);
        let notes = data.notes.or(existing.notes);

        self.base
            .db()
            .query(
                "UPDATE $thing SET \
                 name = $name, \
                 email = $email, \
                 phone = $phone, \
                 id_document = $id_document, \
                 notes = $notes",
            )
            .bind(("thing", thing))
            .bind(("name", name))
            .bind(("email", email))
            .bind(("phone", phone))
            .bind(("id_document", id_document))
            .bind(("notes", notes))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Guest {} not found", id)))
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
