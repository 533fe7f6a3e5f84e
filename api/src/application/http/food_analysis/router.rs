use super::handlers::upload_image::{__path_upload_image, upload_image};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(upload_image))]
pub struct FoodAnalysisApiDoc;

pub fn food_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/upload", state.args.server.root_path),
            post(upload_image),
        )
        // Uploads are not size limited
        .layer(DefaultBodyLimit::disable())
}
