use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::presentation::state::AppState;

use super::error::ApiError;
use super::message_response::MessageResponse;

#[derive(Serialize)]
pub struct ClearHistoryResponse {
    pub message: String,
}

#[tracing::instrument(skip(state))]
pub async fn list_history_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let messages = state.message_repository.list().await?;
    tracing::debug!(count = messages.len(), "History listed");
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

#[tracing::instrument(skip(state))]
pub async fn clear_history_handler(
    State(state): State<AppState>,
) -> Result<Json<ClearHistoryResponse>, ApiError> {
    let deleted = state.message_repository.delete_all().await?;
    tracing::info!(deleted, "Chat history cleared");
    Ok(Json(ClearHistoryResponse {
        message: "Chat history cleared".to_string(),
    }))
}
