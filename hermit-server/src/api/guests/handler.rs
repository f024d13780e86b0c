//! Guest API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Guest, GuestCreate, GuestUpdate};
use crate::db::repository::GuestRepository;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/guests - 获取所有宾客
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Guest>>> {
    let repo = GuestRepository::new(state.db.clone());
    let guests = repo.find_all().await?;
    Ok(Json(guests))
}

#[derive(Debug, Deserialize)]
pub struct GuestSearchQuery {
    pub name: String,
}

/// GET /api/guests/search?name=... - 前台按姓名查找
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<GuestSearchQuery>,
) -> AppResult<Json<Vec<Guest>>> {
    let repo = GuestRepository::new(state.db.clone());
    let guests = repo.search_by_name(&query.name).await?;
    Ok(Json(guests))
}

/// GET /api/guests/:id - 获取单个宾客
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Guest>> {
    let repo = GuestRepository::new(state.db.clone());
    let guest = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Guest {} not found", id)))?;
    Ok(Json(guest))
}

/// POST /api/guests - 登记宾客
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GuestCreate>,
) -> AppResult<Json<Guest>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.id_document, "id_document", MAX_SHORT_TEXT_LEN)?;
    let repo = GuestRepository::new(state.db.clone());
    let guest = repo.create(payload).await?;
    Ok(Json(guest))
}

/// PUT /api/guests/:id - 更新宾客资料
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<GuestUpdate>,
) -> AppResult<Json<Guest>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.id_document, "id_document", MAX_SHORT_TEXT_LEN)?;
    let repo = GuestRepository::new(state.db.clone());
    let guest = repo.update(&id, payload).await?;
    Ok(Json(guest))
}

/// DELETE /api/guests/:id - 删除宾客
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = GuestRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
