use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

pub const MOCK_TRANSCRIPT: &str = "Mock transcript of the uploaded audio.";

pub struct MockTranscriptionEngine;

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _file_name: &str,
    ) -> Result<String, TranscriptionError> {
        Ok(MOCK_TRANSCRIPT.to_string())
    }
}
