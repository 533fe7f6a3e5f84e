use axum::{Router, routing::get};
use utoipa::OpenApi;

use crate::application::http::server::app_state::AppState;

use super::handlers::get_upload::{__path_get_upload, get_upload};

#[derive(OpenApi)]
#[openapi(paths(get_upload))]
pub struct FileApiDoc;

pub fn file_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/uploads/{{filename}}", state.args.server.root_path),
        get(get_upload),
    )
}
