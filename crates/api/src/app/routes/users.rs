use axum::{http::StatusCode, routing::get, Json, Router};

use sigma_core::{UserBasic, UserIn};

use crate::app::extract::{PathParam, ValidatedJson};
use crate::app::schemas::{UserBasicSchema, UserInSchema, ValidationErrorSchema};

pub fn router() -> Router {
    Router::new().route("/users/{username}", get(get_user).post(create_user))
}

/// Echo the username. There is no user record to look up, so the response is
/// the bare username string.
#[utoipa::path(
    get,
    path = "/users/{username}",
    tag = "users",
    params(
        ("username" = String, Path, description = "Username to echo")
    ),
    responses(
        (status = 200, description = "The requested username", body = String),
        (status = 422, description = "Invalid path parameter", body = ValidationErrorSchema)
    )
)]
pub async fn get_user(PathParam(username): PathParam<String>) -> Json<String> {
    tracing::debug!(%username, "echoing username");
    Json(username)
}

/// Echo a submitted user through the public view: `password` is accepted
/// but never returned.
#[utoipa::path(
    post,
    path = "/users/{username}",
    tag = "users",
    params(
        ("username" = String, Path, description = "Username of the user being created")
    ),
    request_body = UserInSchema,
    responses(
        (status = 201, description = "The submitted user without its password", body = UserBasicSchema),
        (status = 422, description = "Validation error", body = ValidationErrorSchema)
    )
)]
pub async fn create_user(
    PathParam(username): PathParam<String>,
    ValidatedJson(user): ValidatedJson<UserIn>,
) -> (StatusCode, Json<UserBasic>) {
    tracing::debug!(%username, body_username = %user.username, "echoing submitted user");
    (StatusCode::CREATED, Json(UserBasic::from(user)))
}
