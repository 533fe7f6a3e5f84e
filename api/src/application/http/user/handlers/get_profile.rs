use axum::extract::Path;

#[utoipa::path(
    get,
    path = "/{username}",
    tag = "user",
    summary = "Profile greeting",
    params(
        ("username" = String, Path, description = "Username"),
    ),
    responses(
        (status = 200, description = "Plain text greeting", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_profile(Path(username): Path<String>) -> String {
    format!("{username}'s profile")
}
