//! Guest Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Guest ID type
pub type GuestId = RecordId;

/// Hotel guest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<GuestId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Passport / national ID presented at the desk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: i64,
}

/// Create guest payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestCreate {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub id_document: Option<String>,
    pub notes: Option<String>,
}

/// Update guest payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
