use axum::{routing::get, Router};

pub mod courses;
pub mod system;
pub mod users;

/// Router for every application endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .merge(courses::router())
        .merge(users::router())
}
