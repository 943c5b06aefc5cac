use axum::Json;

/// Body of `GET /`.
pub const IDENTITY: &str = "∑";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service identity glyph", body = String)
    )
)]
pub async fn root() -> Json<&'static str> {
    Json(IDENTITY)
}
