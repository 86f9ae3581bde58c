use std::sync::Arc;

use crate::application::ports::{LlmClient, MessageRepository, TranscriptionEngine, UploadStore};
use crate::application::services::{RetentionSweeper, SummaryService, TranslationService};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub translation_service: Arc<TranslationService>,
    pub summary_service: Arc<SummaryService>,
    pub message_repository: Arc<dyn MessageRepository>,
    pub settings: Settings,
}

impl AppState {
    /// Wires the services around the given adapters. One sweeper instance is
    /// shared by translation and summary.
    pub fn new(
        settings: Settings,
        llm_client: Arc<dyn LlmClient>,
        transcription_engine: Arc<dyn TranscriptionEngine>,
        upload_store: Arc<dyn UploadStore>,
        message_repository: Arc<dyn MessageRepository>,
    ) -> Self {
        let sweeper = RetentionSweeper::new(
            Arc::clone(&message_repository),
            settings.retention.window_hours,
        );

        let translation_service = Arc::new(TranslationService::new(
            Arc::clone(&llm_client),
            transcription_engine,
            upload_store,
            Arc::clone(&message_repository),
            sweeper.clone(),
        ));

        let summary_service = Arc::new(SummaryService::new(
            llm_client,
            Arc::clone(&message_repository),
            sweeper,
        ));

        Self {
            translation_service,
            summary_service,
            message_repository,
            settings,
        }
    }
}
