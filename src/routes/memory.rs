//! Memory API Routes
//!
//! - POST /api/memory/conversations - Save a conversation
//! - GET /api/memory/conversations/{user_id} - List a user's conversations
//! - PUT /api/memory/preferences/{user_id} - Save user preferences
//! - GET /api/memory/status - Memory service status

use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use tracing::info;

use crate::models::{
    AppState, ConversationListQuery, ConversationListResponse, SaveConversationResponse,
    SavePreferencesResponse,
};
use crate::services::memory::DEFAULT_CONVERSATION_LIMIT;
use crate::services::StatusReport;
use crate::types::{AppResult, Payload};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/memory/conversations", post(save_conversation))
        .route("/api/memory/conversations/{user_id}", get(list_conversations))
        .route("/api/memory/preferences/{user_id}", put(save_preferences))
        .route("/api/memory/status", get(memory_status))
        .with_state(state)
}

async fn save_conversation(
    State(state): State<AppState>,
    Json(conversation): Json<Payload>,
) -> AppResult<Json<SaveConversationResponse>> {
    let memory = state.memory.require()?;
    let conversation_id = memory.save_conversation(&conversation).await?;

    Ok(Json(SaveConversationResponse { conversation_id }))
}

async fn list_conversations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<ConversationListQuery>,
) -> AppResult<Json<ConversationListResponse>> {
    let limit = query.limit.unwrap_or(DEFAULT_CONVERSATION_LIMIT);
    info!(user_id = %user_id, limit, "Listing conversations");

    let conversations = state.memory.require()?.get_conversations(&user_id, limit).await?;
    Ok(Json(ConversationListResponse { conversations }))
}

async fn save_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(preferences): Json<Payload>,
) -> AppResult<Json<SavePreferencesResponse>> {
    state.memory.require()?.save_preferences(&user_id, &preferences).await?;
    Ok(Json(SavePreferencesResponse { saved: true }))
}

async fn memory_status(State(state): State<AppState>) -> Json<StatusReport> {
    Json(state.memory.status().await)
}
