use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::{MockLlmClient, OpenAiClient};

pub struct LlmClientFactory;

#[derive(Debug, thiserror::Error)]
pub enum ProviderFactoryError {
    #[error("missing API key: set GEMINI_API_KEY, OPENAI_API_KEY or APP_LLM__API_KEY")]
    MissingApiKey,
}

impl LlmClientFactory {
    pub fn create(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, ProviderFactoryError> {
        match settings.provider {
            LlmProvider::Mock => {
                tracing::warn!("Using mock completion client; no requests leave the process");
                Ok(Arc::new(MockLlmClient))
            }
            LlmProvider::OpenAi => {
                let key = settings.api_key().ok_or(ProviderFactoryError::MissingApiKey)?;
                tracing::info!(model = %settings.chat_model, "Using OpenAI-compatible completion client");
                Ok(Arc::new(OpenAiClient::new(
                    key.to_string(),
                    settings.base_url.clone(),
                    settings.chat_model.clone(),
                )))
            }
        }
    }
}
