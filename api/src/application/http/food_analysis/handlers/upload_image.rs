use axum::extract::{Multipart, State};
use bytes::Bytes;
use freshlens_core::domain::{
    food_analysis::{entities::AnalysisResult, ports::FoodAnalysisService},
    storage::services::FileService,
};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct UploadResponse {
    pub image_url: String,
    pub width: u32,
    pub height: u32,
    /// `dish`, `freshness`, `quality`, `quantity` and `nutrition_value` are always present
    #[schema(value_type = Object)]
    pub ai_analysis: AnalysisResult,
}

/// Multipart body accepted by the upload route, for the OpenAPI document only
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadImageForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "food-analysis",
    summary = "Upload and analyze a food image",
    description = "Stores the uploaded image under its original filename, asks the vision model to rate the dish and returns the normalized analysis together with the image URL.",
    request_body(content = UploadImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = UploadResponse),
        (status = 400, description = "No file part or empty filename", body = ApiErrorResponse),
        (status = 500, description = "Image stored but could not be processed", body = ApiErrorResponse)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<UploadResponse>, ApiError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        // Only parts sent as files count, plain form values named `file` are skipped
        if field.name() != Some("file") {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read file bytes: {}", e);
            ApiError::BadRequest(format!("Failed to read file: {}", e))
        })?;

        upload = Some((filename, data));
        break;
    }

    let (filename, data) = upload.ok_or_else(|| ApiError::BadRequest("No file part".to_string()))?;
    info!(filename = %filename, size = data.len(), "Received file");

    if filename.is_empty() {
        return Err(ApiError::BadRequest("No selected file".to_string()));
    }

    let stored = state
        .service
        .upload_file(filename.clone(), data.clone())
        .await
        .map_err(|e| {
            error!(error = %e, filename = %filename, "Failed to save upload");
            ApiError::InternalServerError(format!("Error saving file: {}", e))
        })?;

    let image_url = state.image_url(&filename);

    let analysis = state
        .service
        .analyze_image(&stored, data)
        .await
        .map_err(|e| {
            error!(error = %e, filename = %filename, "Error processing image");
            ApiError::ProcessingFailed {
                message: format!("Error processing image: {}", e),
                image_url: image_url.clone(),
            }
        })?;

    Ok(Response::OK(UploadResponse {
        image_url,
        width: analysis.width,
        height: analysis.height,
        ai_analysis: analysis.analysis,
    }))
}
