//! Room Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Room ID type
pub type RoomId = RecordId;

/// Physical room status
///
/// `occupied` is owned by the booking lifecycle (set on check-in, cleared on
/// check-out). `maintenance`/`cleaning` are set directly by staff and survive
/// a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    Cleaning,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::Cleaning => "cleaning",
        }
    }
}

/// Room entity (客房)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RoomId>,
    /// Room number, unique across the hotel
    pub number: String,
    /// Room type reference (price and capacity live there)
    #[serde(with = "serde_helpers::record_id")]
    pub room_type: RecordId,
    pub floor: i32,
    pub status: RoomStatus,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_clean: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Create room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreate {
    pub number: String,
    #[serde(with = "serde_helpers::record_id")]
    pub room_type: RecordId,
    pub floor: i32,
    pub notes: Option<String>,
}

/// Update room payload
///
/// Staff may move a room between `available`/`maintenance`/`cleaning`;
/// `occupied` is rejected at the handler (manager-owned).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub room_type: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoomStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_clean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
