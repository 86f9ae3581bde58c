use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{UploadStore, UploadStoreError};
use crate::domain::UploadPath;

/// Writes uploads under a scratch directory on local disk.
pub struct LocalUploadStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalUploadStore {
    pub fn new(base_path: PathBuf) -> Result<Self, UploadStoreError> {
        std::fs::create_dir_all(&base_path).map_err(UploadStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl UploadStore for LocalUploadStore {
    async fn save(&self, file_name: &str, data: Bytes) -> Result<UploadPath, UploadStoreError> {
        let path = UploadPath::for_upload(file_name);
        let store_path = StorePath::from(path.as_str());

        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;

        Ok(path)
    }
}
