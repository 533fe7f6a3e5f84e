use std::future::Future;

use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::ports::LLMClient,
    image::ports::ImageDecoder,
    storage::{entities::StoredImage, ports::BlobStore},
};

/// Service trait for upload storage operations
pub trait FileService: Send + Sync {
    /// Persist an uploaded file under its original name
    fn upload_file(
        &self,
        filename: String,
        file_data: Bytes,
    ) -> impl Future<Output = Result<StoredImage, CoreError>> + Send;

    /// Fetch a previously uploaded file
    fn read_file(&self, filename: String) -> impl Future<Output = Result<Bytes, CoreError>> + Send;
}

impl<BS, ID, LLM> FileService for Service<BS, ID, LLM>
where
    BS: BlobStore,
    ID: ImageDecoder,
    LLM: LLMClient,
{
    #[instrument(skip(self, file_data), fields(size = file_data.len()))]
    async fn upload_file(
        &self,
        filename: String,
        file_data: Bytes,
    ) -> Result<StoredImage, CoreError> {
        let stored = self.blob_store.save(&filename, file_data).await?;

        tracing::info!(
            upload_id = %stored.id,
            path = %stored.path.display(),
            checksum = %stored.checksum_sha256,
            "Saved upload"
        );

        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn read_file(&self, filename: String) -> Result<Bytes, CoreError> {
        self.blob_store.read(&filename).await
    }
}
