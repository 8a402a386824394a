//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/api/health`, `/api/status` - Health and optional service status
//! - `/api/analytics` - Usage analytics overview
//! - `/api/memory` - Conversation and preference storage
//! - `/api/payments` - Payment processing and usage statistics

pub mod analytics;
pub mod health;
pub mod memory;
pub mod payment;

use axum::Router;
use crate::middleware;
use crate::models::AppState;
use tracing::info;

/// Create the main application router
///
/// Service routes stay mounted when a service is absent; they answer
/// with a degraded 503 response instead of disappearing.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .merge(health::router(state.clone()))
        .merge(memory::router(state.clone()))
        .merge(payment::router(state))
        .merge(analytics::router());

    middleware::apply_tracing(middleware::apply_cors(api_router, &cors_origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{body::Body, http::{Request, StatusCode}};
    use tower::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_initialized_services_are_reported() {
        let config = Config::from_lookup(|_| None).unwrap();
        let app = create_router(AppState::initialize(config).await);

        let (status, data) = get_json(app.clone(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["services"]["memory"], true);
        assert_eq!(data["services"]["payment"], true);

        let (_, data) = get_json(app, "/api/payments/usage/u1").await;
        assert_eq!(data["tier"], "free");
    }

    #[tokio::test]
    async fn test_disabled_services_degrade() {
        let config = Config::from_lookup(|key| match key {
            "MEMORY_SERVICE_ENABLED" | "PAYMENT_SERVICE_ENABLED" => Some("false".to_string()),
            _ => None,
        })
        .unwrap();
        let app = create_router(AppState::initialize(config).await);

        let (status, data) = get_json(app.clone(), "/api/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["backend_available"], true);
        assert_eq!(data["services"]["memory"]["available"], false);
        assert_eq!(data["services"]["payment"]["available"], false);

        let (status, _) = get_json(app.clone(), "/api/memory/conversations/u1").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, data) = get_json(app, "/api/analytics/overview").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["total_conversations"], 0);
    }
}
