use axum::{extract::State, routing::get, Json, Router};
use crate::models::{AppState, HealthResponse, ServiceAvailability, ServiceFlags, StatusResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/status", get(service_status))
        .with_state(state)
}

/// Always healthy; optional services only report whether they are up
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        services: ServiceFlags {
            memory: state.memory.is_available(),
            payment: state.payment.is_available(),
        },
        message: "DotBot Backend - Optional Enhancement Layer".to_string(),
    };

    Json(response)
}

async fn service_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        backend_available: true,
        services: ServiceAvailability {
            memory: state.memory.availability(),
            payment: state.payment.availability(),
        },
    })
}
