//! Payment Reconciliation API Module
//!
//! 支付网关回调入口。本服务不处理扣款，只消费支付结果：
//! 成功 → 自动确认预订，失败 → 保持 pending 等待前台跟进。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// 支付结果路由
pub fn router() -> Router<ServerState> {
    let routes = Router::new().route("/confirmation", post(handler::confirmation));

    Router::new().nest("/api/payments", routes)
}
