//! Booking API 模块
//!
//! 所有写操作经由 BookingManager，路由层不直接改库。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/confirm", post(handler::confirm))
        .route("/{id}/check-in", post(handler::check_in))
        .route("/{id}/check-out", post(handler::check_out))
        .route("/{id}/cancel", post(handler::cancel))
}
