// DotBot Backend - Optional enhancement layer (memory and payment services)

pub mod config;
pub mod models;
pub mod types;
pub mod services;
pub mod routes;
pub mod middleware;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;
pub use types::{AppError, AppResult};

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
