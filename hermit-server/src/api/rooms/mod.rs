//! Room API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// 房间路由
pub fn router() -> Router<ServerState> {
    let routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/status", post(handler::set_status));

    Router::new().nest("/api/rooms", routes)
}
