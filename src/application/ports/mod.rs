mod llm_client;
mod message_repository;
mod repository_error;
mod transcription_engine;
mod upload_store;

pub use llm_client::{LlmClient, LlmClientError};
pub use message_repository::MessageRepository;
pub use repository_error::RepositoryError;
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use upload_store::{UploadStore, UploadStoreError};
