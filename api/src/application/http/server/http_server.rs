use std::sync::Arc;

use crate::application::http::file::router::file_routes;
use crate::application::http::food_analysis::router::food_analysis_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::openapi;
use crate::application::http::user::router::user_routes;
use crate::args::Args;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use freshlens_core::{application::create_service, domain::common::FreshlensConfig};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, info_span};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let freshlens_config: FreshlensConfig = FreshlensConfig::from(args.as_ref().clone());
    let service = create_service(freshlens_config).await?;

    Ok(AppState::new(args, service))
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    let allow_origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin))
            .collect::<Result<Vec<HeaderValue>, _>>()?;

        debug!("Allowed origins: {:?}", origins);
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allow_origin)
        .allow_headers([CONTENT_TYPE]))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins)?;

    let mut openapi = openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(food_analysis_routes(state.clone()))
        .merge(file_routes(state.clone()))
        .merge(user_routes(state.clone()))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
