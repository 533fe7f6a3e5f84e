use crate::application::http::{
    file::router::FileApiDoc, food_analysis::router::FoodAnalysisApiDoc, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "freshlens API"
    ),
    nest(
        (path = "/uploads", api = FileApiDoc),
        (path = "/user", api = UserApiDoc),
    )
)]
pub struct ApiDoc;

/// Full document, including the routes that sit at the root
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(FoodAnalysisApiDoc::openapi());
    openapi
}
