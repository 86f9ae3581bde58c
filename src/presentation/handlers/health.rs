use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

pub const LIVENESS_TEXT: &str = "Backend is running";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn root_handler() -> &'static str {
    LIVENESS_TEXT
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}
