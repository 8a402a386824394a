// Type definitions and error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Which optional service an error, status entry or log line refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Memory,
    Payment,
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceKind::Memory => write!(f, "memory"),
            ServiceKind::Payment => write!(f, "payment"),
        }
    }
}

/// Untyped key-value body accepted by the placeholder services
pub type Payload = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} service not initialized")]
    NotInitialized(ServiceKind),

    #[error("{0} service is not available")]
    Unavailable(ServiceKind),

    /// Only here because the serializer API returns `Result`; serializing
    /// a `Payload` into memory does not fail in practice.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotInitialized(_) | AppError::Unavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let service = match &self {
            AppError::NotInitialized(kind) | AppError::Unavailable(kind) => Some(*kind),
            AppError::Serialization(_) => None,
        };

        if service.is_some() {
            tracing::warn!("Degraded response: {}", self);
        } else {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "service": service,
        });

        (self.status_code(), Json(body)).into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
