//! Room API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Room, RoomCreate, RoomStatus, RoomUpdate};
use crate::db::repository::{BookingRepository, RoomRepository};
use crate::utils::validation::{
    MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/rooms - 获取所有房间
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Room>>> {
    let repo = RoomRepository::new(state.db.clone());
    let rooms = repo.find_all().await?;
    Ok(Json(rooms))
}

/// GET /api/rooms/:id - 获取单个房间
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Room>> {
    let repo = RoomRepository::new(state.db.clone());
    let room = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Room {} not found", id)))?;
    Ok(Json(room))
}

/// POST /api/rooms - 创建房间
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<Json<Room>> {
    validate_required_text(&payload.number, "number", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    let repo = RoomRepository::new(state.db.clone());
    let room = repo.create(payload).await?;
    Ok(Json(room))
}

/// PUT /api/rooms/:id - 更新房间
///
/// `occupied` 状态只能由入住流程设置，前台不能手动指定
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RoomUpdate>,
) -> AppResult<Json<Room>> {
    if payload.status == Some(RoomStatus::Occupied) {
        return Err(AppError::business_rule(
            "Room status 'occupied' is managed by check-in, not set directly",
        ));
    }
    if let Some(number) = &payload.number {
        validate_required_text(number, "number", MAX_SHORT_TEXT_LEN)?;
    }
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    let repo = RoomRepository::new(state.db.clone());
    let room = repo.update(&id, payload).await?;
    Ok(Json(room))
}

#[derive(Debug, Deserialize)]
pub struct RoomStatusPayload {
    pub status: RoomStatus,
    pub is_clean: Option<bool>,
}

/// POST /api/rooms/:id/status - 房务状态变更 (维修/清洁/可用)
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RoomStatusPayload>,
) -> AppResult<Json<Room>> {
    if payload.status == RoomStatus::Occupied {
        return Err(AppError::business_rule(
            "Room status 'occupied' is managed by check-in, not set directly",
        ));
    }
    let repo = RoomRepository::new(state.db.clone());
    let room = repo
        .update(
            &id,
            RoomUpdate {
                status: Some(payload.status),
                is_clean: payload.is_clean,
                ..Default::default()
            },
        )
        .await?;
    Ok(Json(room))
}

/// DELETE /api/rooms/:id - 删除房间
///
/// 仍有未完结预订 (pending/confirmed/checked_in) 的房间不可删除
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let thing: surrealdb::RecordId = id
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid ID: {}", id)))?;
    let bookings = BookingRepository::new(state.db.clone());
    let open = bookings.count_open_for_room(&thing).await?;
    if open > 0 {
        return Err(AppError::business_rule(format!(
            "Room {} has {} open booking(s) and cannot be deleted",
            id, open
        )));
    }
    let repo = RoomRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
