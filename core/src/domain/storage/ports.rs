use std::future::Future;

use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

use super::entities::StoredImage;

/// Port for the flat upload directory, keyed by filename
#[cfg_attr(test, mockall::automock)]
pub trait BlobStore: Send + Sync {
    /// Write the payload under `filename`, replacing any previous content
    fn save(
        &self,
        filename: &str,
        payload: Bytes,
    ) -> impl Future<Output = Result<StoredImage, CoreError>> + Send;

    /// Read back the bytes stored under `filename`, `CoreError::NotFound` if absent
    fn read(&self, filename: &str) -> impl Future<Output = Result<Bytes, CoreError>> + Send;
}
