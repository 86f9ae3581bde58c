use std::io;

use bytes::Bytes;

use crate::domain::UploadPath;

/// Scratch storage for uploaded audio before it is transcribed.
#[async_trait::async_trait]
pub trait UploadStore: Send + Sync {
    async fn save(&self, file_name: &str, data: Bytes) -> Result<UploadPath, UploadStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
