use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[tracing::instrument(skip(state))]
pub async fn summary_handler(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = state.summary_service.summarize().await?;
    Ok(Json(SummaryResponse { summary }))
}
