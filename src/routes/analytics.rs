// Usage analytics (optional enhancement, not computed)

use axum::{routing::get, Json, Router};
use crate::models::AnalyticsOverview;

pub fn router() -> Router {
    Router::new()
        .route("/api/analytics/overview", get(analytics_overview))
}

async fn analytics_overview() -> Json<AnalyticsOverview> {
    Json(AnalyticsOverview {
        total_conversations: 0,
        active_users: 0,
        popular_agents: Vec::new(),
        note: "Analytics service not implemented - this is optional".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{Request, StatusCode}};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_analytics_overview() {
        let response = router()
            .oneshot(Request::builder().uri("/api/analytics/overview").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let data: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(data["total_conversations"], 0);
        assert_eq!(data["active_users"], 0);
        assert!(data["popular_agents"].as_array().unwrap().is_empty());
        assert!(data["note"].is_string());
    }
}
