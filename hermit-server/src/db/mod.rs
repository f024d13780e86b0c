//! Database Module
//!
//! Embedded SurrealDB storage. Schema is schemaless except for the unique
//! indexes applied at startup.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "hermit";
const DATABASE: &str = "back_office";

/// Unique indexes and lookup indexes applied on startup.
///
/// The unique index on booking.number turns the best-effort number generator
/// into a hard guarantee: a collision surfaces as a write error and the
/// generator retries with a fresh suffix.
const SCHEMA: &str = r#"
    DEFINE INDEX IF NOT EXISTS idx_room_number ON TABLE room FIELDS number UNIQUE;
    DEFINE INDEX IF NOT EXISTS idx_room_type_name ON TABLE room_type FIELDS name UNIQUE;
    DEFINE INDEX IF NOT EXISTS idx_booking_number ON TABLE booking FIELDS number UNIQUE;
    DEFINE INDEX IF NOT EXISTS idx_booking_room ON TABLE booking FIELDS room, status;
"#;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the on-disk database (RocksDB backend)
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::init(db).await
    }

    /// Open an in-memory database (tests)
    pub async fn new_in_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::init(db).await
    }

    async fn init(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

        tracing::info!("Database ready (SurrealDB embedded, ns={NAMESPACE} db={DATABASE})");
        Ok(Self { db })
    }
}
