use crate::application::ports::{LlmClient, LlmClientError};

/// Offline stand-in that answers every prompt with a canned reply.
pub struct MockLlmClient;

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        let first_line = prompt.lines().next().unwrap_or_default();
        Ok(format!("[mock] {}", first_line))
    }
}
