use axum::{Router, routing::get};
use utoipa::OpenApi;

use crate::application::http::server::app_state::AppState;

use super::handlers::get_profile::{__path_get_profile, get_profile};

#[derive(OpenApi)]
#[openapi(paths(get_profile))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/user/{{username}}", state.args.server.root_path),
        get(get_profile),
    )
}
