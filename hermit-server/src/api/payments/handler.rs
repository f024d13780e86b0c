//! Payment Reconciliation Handlers

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::bookings::PaymentOutcome;
use crate::core::ServerState;
use crate::db::models::Booking;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct PaymentConfirmation {
    pub booking_id: String,
    pub outcome: PaymentOutcome,
}

/// POST /api/payments/confirmation - 支付结果回调
pub async fn confirmation(
    State(state): State<ServerState>,
    Json(payload): Json<PaymentConfirmation>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .booking_manager
        .payment_outcome(&payload.booking_id, payload.outcome)
        .await?;
    Ok(Json(booking))
}
