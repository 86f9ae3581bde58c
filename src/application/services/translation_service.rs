use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    LlmClient, MessageRepository, RepositoryError, TranscriptionEngine, UploadStore,
    UploadStoreError,
};
use crate::domain::{Message, MessageRole, NewMessage};

use super::RetentionSweeper;
use super::prompts::{render_failure, translation_prompt};

pub struct TranslationService {
    llm_client: Arc<dyn LlmClient>,
    transcription_engine: Arc<dyn TranscriptionEngine>,
    upload_store: Arc<dyn UploadStore>,
    repository: Arc<dyn MessageRepository>,
    sweeper: RetentionSweeper,
}

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub source: TranslationSource,
    pub target_language: Option<String>,
    pub role: MessageRole,
}

#[derive(Debug, Clone)]
pub enum TranslationSource {
    Text(Option<String>),
    Audio(AudioUpload),
}

#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub file_name: String,
    pub data: Bytes,
}

/// Original text plus, when transcription already failed, the text to store
/// in place of a translation.
struct ResolvedText {
    text: String,
    failed_transcription: bool,
}

impl TranslationService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        transcription_engine: Arc<dyn TranscriptionEngine>,
        upload_store: Arc<dyn UploadStore>,
        repository: Arc<dyn MessageRepository>,
        sweeper: RetentionSweeper,
    ) -> Self {
        Self {
            llm_client,
            transcription_engine,
            upload_store,
            repository,
            sweeper,
        }
    }

    #[tracing::instrument(skip(self, request), fields(role = %request.role))]
    pub async fn translate(&self, request: TranslationRequest) -> Result<Message, TranslationError> {
        self.sweeper.sweep().await;

        let target_language = non_empty(request.target_language)
            .ok_or(TranslationError::MissingInput)?;

        let resolved = self.resolve_text(request.source).await?;

        let translated_text = if resolved.failed_transcription {
            resolved.text.clone()
        } else {
            let prompt = translation_prompt(&target_language, &resolved.text);
            match self.llm_client.complete(&prompt).await {
                Ok(translation) => translation,
                Err(e) => {
                    tracing::warn!(error = %e, "Translation completion failed");
                    render_failure(&e)
                }
            }
        };

        let message = NewMessage::new(request.role, resolved.text, translated_text);
        let stored = self.repository.insert(&message).await?;

        tracing::info!(
            message_id = %stored.id,
            target_language = %target_language,
            "Message translated and stored"
        );

        Ok(stored)
    }

    async fn resolve_text(&self, source: TranslationSource) -> Result<ResolvedText, TranslationError> {
        match source {
            TranslationSource::Text(text) => {
                let text = non_empty(text).ok_or(TranslationError::MissingInput)?;
                Ok(ResolvedText {
                    text,
                    failed_transcription: false,
                })
            }
            TranslationSource::Audio(upload) => {
                let path = self
                    .upload_store
                    .save(&upload.file_name, upload.data.clone())
                    .await?;

                tracing::debug!(path = %path, bytes = upload.data.len(), "Audio upload stored");

                match self
                    .transcription_engine
                    .transcribe(&upload.data, path.as_str())
                    .await
                {
                    Ok(transcript) => {
                        let text = non_empty(Some(transcript)).ok_or(TranslationError::MissingInput)?;
                        Ok(ResolvedText {
                            text,
                            failed_transcription: false,
                        })
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Transcription failed, skipping translation");
                        Ok(ResolvedText {
                            text: render_failure(&e),
                            failed_transcription: true,
                        })
                    }
                }
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("Text and targetLanguage are required")]
    MissingInput,
    #[error("upload: {0}")]
    Upload(#[from] UploadStoreError),
    #[error("storage: {0}")]
    Repository(#[from] RepositoryError),
}
