use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use freshlens_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
    /// Set when the upload was stored before the failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),

    /// The file is stored but could not be analysed
    #[error("{message}")]
    ProcessingFailed { message: String, image_url: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) | ApiError::ProcessingFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("File not found".to_string()),
            other => ApiError::InternalServerError(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::ProcessingFailed { message, image_url } => ApiErrorResponse {
                error: message,
                image_url: Some(image_url),
            },
            other => ApiErrorResponse {
                error: other.to_string(),
                image_url: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_not_found_maps_to_404() {
        let error = ApiError::from(CoreError::NotFound);
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_core_failures_map_to_500() {
        let error = ApiError::from(CoreError::StorageError("disk full".to_string()));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Storage error: disk full");
    }

    async fn body_of(error: ApiError) -> (StatusCode, ApiErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_processing_failure_body_keeps_image_url() {
        let (status, body) = body_of(ApiError::ProcessingFailed {
            message: "Error processing image: boom".to_string(),
            image_url: "http://127.0.0.1:5002/uploads/a.png".to_string(),
        })
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            ApiErrorResponse {
                error: "Error processing image: boom".to_string(),
                image_url: Some("http://127.0.0.1:5002/uploads/a.png".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_other_errors_omit_image_url() {
        let (status, body) = body_of(ApiError::BadRequest("No file part".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "No file part");
        assert_eq!(body.image_url, None);
    }
}
