//! Room Type API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// 房型路由
pub fn router() -> Router<ServerState> {
    let routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        );

    Router::new().nest("/api/room-types", routes)
}
