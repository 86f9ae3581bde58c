use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::RepositoryError;
use crate::application::services::{SummaryError, TranslationError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler-level failure rendered as `{error}` with a non-2xx status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(message) => {
                tracing::warn!(error = %message, "Rejected request");
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<TranslationError> for ApiError {
    fn from(e: TranslationError) -> Self {
        if matches!(e, TranslationError::MissingInput) {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl From<SummaryError> for ApiError {
    fn from(e: SummaryError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
