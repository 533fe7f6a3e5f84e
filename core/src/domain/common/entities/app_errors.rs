use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Cannot identify image file: {0}")]
    ImageDecodeError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
