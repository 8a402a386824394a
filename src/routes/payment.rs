use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::models::AppState;
use crate::services::payment::{PaymentReceipt, UsageStats};
use crate::services::StatusReport;
use crate::types::{AppResult, Payload};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/payments", post(process_payment))
        .route("/api/payments/usage/{user_id}", get(usage_stats))
        .route("/api/payments/status", get(payment_status))
        .with_state(state)
}

async fn process_payment(
    State(state): State<AppState>,
    Json(payment): Json<Payload>,
) -> AppResult<Json<PaymentReceipt>> {
    let receipt = state.payment.require()?.process_payment(&payment).await?;
    info!(transaction_id = %receipt.transaction_id, "Payment processed");
    Ok(Json(receipt))
}

async fn usage_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<UsageStats>> {
    Ok(Json(state.payment.require()?.get_usage_stats(&user_id).await?))
}

async fn payment_status(State(state): State<AppState>) -> Json<StatusReport> {
    Json(state.payment.status().await)
}
