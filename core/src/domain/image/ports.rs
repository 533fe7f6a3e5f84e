use crate::domain::common::entities::app_errors::CoreError;

use super::entities::DecodedImage;

/// Port for turning raw upload bytes into pixels
#[cfg_attr(test, mockall::automock)]
pub trait ImageDecoder: Send + Sync + 'static {
    /// Decode and normalize to RGB. Fails with `CoreError::ImageDecodeError`
    /// when the bytes are not a recognizable image.
    fn decode(&self, data: &[u8]) -> Result<DecodedImage, CoreError>;

    /// Encode a decoded image for transport, returning the bytes and their MIME type
    fn encode_for_transport(&self, image: &DecodedImage) -> Result<(Vec<u8>, String), CoreError>;
}
