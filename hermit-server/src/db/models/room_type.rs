//! Room Type Model

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Room type ID
pub type RoomTypeId = RecordId;

/// Room category shared by many physical rooms (房型)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomType {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RoomTypeId>,
    pub name: String,
    /// Nightly base price
    pub base_price: Decimal,
    /// Maximum adults + children
    pub max_occupancy: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Create room type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTypeCreate {
    pub name: String,
    pub base_price: Decimal,
    pub max_occupancy: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Update room type payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomTypeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_occupancy: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}
