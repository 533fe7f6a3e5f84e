use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response as AxumResponse},
};
use freshlens_core::domain::{image::content_type_for, storage::services::FileService};

use crate::application::http::server::{
    api_entities::api_error::{ApiError, ApiErrorResponse},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{filename}",
    tag = "file",
    summary = "Download an uploaded file",
    params(
        ("filename" = String, Path, description = "Original filename of the upload"),
    ),
    responses(
        (status = 200, description = "Raw file bytes"),
        (status = 404, description = "No upload with that name", body = ApiErrorResponse)
    ),
)]
pub async fn get_upload(
    Path(filename): Path<String>,
    State(state): State<AppState>,
) -> Result<AxumResponse, ApiError> {
    let data = state
        .service
        .read_file(filename.clone())
        .await
        .map_err(ApiError::from)?;

    Ok(([(header::CONTENT_TYPE, content_type_for(&filename))], data).into_response())
}
