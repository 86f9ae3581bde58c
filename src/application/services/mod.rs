pub mod prompts;
mod retention_sweeper;
mod summary_service;
mod translation_service;

pub use retention_sweeper::RetentionSweeper;
pub use summary_service::{SummaryError, SummaryService};
pub use translation_service::{
    AudioUpload, TranslationError, TranslationRequest, TranslationService, TranslationSource,
};
