use axum::Json;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::application::services::{AudioUpload, TranslationRequest, TranslationSource};
use crate::domain::MessageRole;
use crate::infrastructure::observability::redact_for_log;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::message_response::MessageResponse;

const NO_INPUT: &str = "No text or audio provided";
const NO_AUDIO_FILE: &str = "No audio file found";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateJsonBody {
    text: Option<String>,
    target_language: Option<String>,
    role: Option<String>,
}

/// `/translate` input: a JSON body, or a multipart form carrying `audio`.
/// JSON wins whenever the content type says so.
pub struct TranslatePayload(pub TranslationRequest);

impl<S> FromRequest<S> for TranslatePayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if is_json(&content_type) {
            let Json(body) = Json::<TranslateJsonBody>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;

            if let Some(text) = &body.text {
                tracing::debug!(
                    text = %redact_for_log(text),
                    "Text translation request received"
                );
            }

            return Ok(Self(TranslationRequest {
                source: TranslationSource::Text(body.text),
                target_language: body.target_language,
                role: MessageRole::or_default(body.role),
            }));
        }

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            return read_audio_form(multipart).await.map(Self);
        }

        Err(ApiError::BadRequest(NO_INPUT.to_string()))
    }
}

fn is_json(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or_default().trim();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

async fn read_audio_form(mut multipart: Multipart) -> Result<TranslationRequest, ApiError> {
    let mut audio = None;
    let mut target_language = None;
    let mut role = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart: {}", e)))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("audio") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read audio: {}", e)))?;
                audio = Some(AudioUpload { file_name, data });
            }
            Some("targetLanguage") => target_language = Some(read_text(field).await?),
            Some("role") => role = Some(read_text(field).await?),
            _ => {}
        }
    }

    let audio = audio.ok_or_else(|| ApiError::BadRequest(NO_INPUT.to_string()))?;
    if audio.file_name.is_empty() {
        return Err(ApiError::BadRequest(NO_AUDIO_FILE.to_string()));
    }

    tracing::debug!(
        file_name = %audio.file_name,
        bytes = audio.data.len(),
        "Audio translation request received"
    );

    Ok(TranslationRequest {
        source: TranslationSource::Audio(audio),
        target_language,
        role: MessageRole::or_default(role),
    })
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read form field: {}", e)))
}

#[tracing::instrument(skip(state, payload))]
pub async fn translate_handler(
    State(state): State<AppState>,
    TranslatePayload(payload): TranslatePayload,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state.translation_service.translate(payload).await?;
    Ok(Json(MessageResponse::from(message)))
}
