//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::core::ServerState;
use crate::db::models::{Booking, BookingCreate, BookingFilter, BookingUpdate};
use crate::utils::AppResult;

/// GET /api/bookings - 预订列表 (支持状态/房间/宾客/日期过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<BookingFilter>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.booking_manager.list(&filter).await?;
    Ok(Json(bookings))
}

/// GET /api/bookings/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_manager.get(&id).await?;
    Ok(Json(booking))
}

/// POST /api/bookings - 创建预订 (pending)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_manager.create(payload).await?;
    Ok(Json(booking))
}

/// PUT /api/bookings/:id - 修改预订 (日期变更会重新校验可用性并重算总价)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BookingUpdate>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_manager.update(&id, payload).await?;
    Ok(Json(booking))
}

/// POST /api/bookings/:id/confirm - 人工确认
pub async fn confirm(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_manager.confirm(&id).await?;
    Ok(Json(booking))
}

/// POST /api/bookings/:id/check-in - 办理入住
pub async fn check_in(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_manager.check_in(&id).await?;
    Ok(Json(booking))
}

/// POST /api/bookings/:id/check-out - 办理退房
pub async fn check_out(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_manager.check_out(&id).await?;
    Ok(Json(booking))
}

/// POST /api/bookings/:id/cancel - 取消预订 (保留记录)
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_manager.cancel(&id).await?;
    Ok(Json(booking))
}

/// DELETE /api/bookings/:id - 删除预订 (仅 pending/cancelled)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.booking_manager.delete(&id).await?;
    Ok(Json(true))
}
