use std::sync::Arc;

use crate::application::ports::{LlmClient, MessageRepository, RepositoryError};

use super::RetentionSweeper;
use super::prompts::{NO_CONVERSATION, render_failure, summary_prompt};

pub struct SummaryService {
    llm_client: Arc<dyn LlmClient>,
    repository: Arc<dyn MessageRepository>,
    sweeper: RetentionSweeper,
}

impl SummaryService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        repository: Arc<dyn MessageRepository>,
        sweeper: RetentionSweeper,
    ) -> Self {
        Self {
            llm_client,
            repository,
            sweeper,
        }
    }

    /// Summarizes every retained message. Returns a fixed notice without
    /// calling the model when nothing is stored.
    #[tracing::instrument(skip(self))]
    pub async fn summarize(&self) -> Result<String, SummaryError> {
        self.sweeper.sweep().await;

        let messages = self.repository.list().await?;
        if messages.is_empty() {
            return Ok(NO_CONVERSATION.to_string());
        }

        let conversation = messages
            .iter()
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        tracing::debug!(messages = messages.len(), "Requesting conversation summary");

        match self.llm_client.complete(&summary_prompt(&conversation)).await {
            Ok(summary) => Ok(summary),
            Err(e) => {
                tracing::warn!(error = %e, "Summary completion failed");
                Ok(render_failure(&e))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("storage: {0}")]
    Repository(#[from] RepositoryError),
}
