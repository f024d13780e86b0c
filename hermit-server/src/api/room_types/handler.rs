//! Room Type API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{RoomType, RoomTypeCreate, RoomTypeUpdate};
use crate::db::repository::RoomTypeRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/room-types - 获取所有房型
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<RoomType>>> {
    let repo = RoomTypeRepository::new(state.db.clone());
    let types = repo.find_all().await?;
    Ok(Json(types))
}

/// GET /api/room-types/:id - 获取单个房型
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<RoomType>> {
    let repo = RoomTypeRepository::new(state.db.clone());
    let room_type = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Room type {} not found", id)))?;
    Ok(Json(room_type))
}

/// POST /api/room-types - 创建房型
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoomTypeCreate>,
) -> AppResult<Json<RoomType>> {
    if payload.base_price.is_sign_negative() {
        return Err(AppError::validation("base_price cannot be negative"));
    }
    if payload.max_occupancy == 0 {
        return Err(AppError::validation("max_occupancy must be at least 1"));
    }
    let repo = RoomTypeRepository::new(state.db.clone());
    let room_type = repo.create(payload).await?;
    Ok(Json(room_type))
}

/// PUT /api/room-types/:id - 更新房型
///
/// 价格变更只影响之后创建的预订，已有预订的总价保持不变
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RoomTypeUpdate>,
) -> AppResult<Json<RoomType>> {
    if let Some(price) = payload.base_price
        && price.is_sign_negative()
    {
        return Err(AppError::validation("base_price cannot be negative"));
    }
    if payload.max_occupancy == Some(0) {
        return Err(AppError::validation("max_occupancy must be at least 1"));
    }
    let repo = RoomTypeRepository::new(state.db.clone());
    let room_type = repo.update(&id, payload).await?;
    Ok(Json(room_type))
}

/// DELETE /api/room-types/:id - 删除房型
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = RoomTypeRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
