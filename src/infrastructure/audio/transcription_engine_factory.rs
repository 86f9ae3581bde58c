use std::sync::Arc;

use crate::application::ports::TranscriptionEngine;
use crate::infrastructure::llm::ProviderFactoryError;
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::mock_transcription_engine::MockTranscriptionEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        settings: &LlmSettings,
    ) -> Result<Arc<dyn TranscriptionEngine>, ProviderFactoryError> {
        match settings.provider {
            LlmProvider::Mock => Ok(Arc::new(MockTranscriptionEngine)),
            LlmProvider::OpenAi => {
                let key = settings.api_key().ok_or(ProviderFactoryError::MissingApiKey)?;
                tracing::info!(model = %settings.transcription_model, "Using OpenAI-compatible Whisper engine");
                Ok(Arc::new(OpenAiWhisperEngine::new(
                    key.to_string(),
                    settings.base_url.clone(),
                    Some(settings.transcription_model.clone()),
                )))
            }
        }
    }
}
