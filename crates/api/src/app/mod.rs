//! HTTP API application wiring (Axum router + layers).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `extract.rs`: body/path extractors that reject with validation errors
//! - `errors.rs`: consistent error responses
//! - `schemas.rs` / `docs.rs`: OpenAPI document

use std::any::Any;

use axum::{response::IntoResponse, response::Response, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::app::errors::ApiError;

pub mod docs;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod schemas;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// This is the only place routes are registered; the returned router holds
/// no state shared between requests.
pub fn build_app() -> Router {
    routes::router()
        .merge(SwaggerUi::new(docs::SWAGGER_UI_PATH).url(docs::OPENAPI_PATH, docs::ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_to_response))
                .layer(CorsLayer::permissive()),
        )
}

fn panic_to_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };
    ApiError::Internal(details).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn root_is_the_identity_glyph() {
        let (status, body) = send(Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("∑"));
    }

    #[tokio::test]
    async fn undecodable_path_parameter_is_a_validation_error() {
        let (status, body) =
            send(Request::get("/courses/%FF").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["path", "shortname"]));
    }

    #[tokio::test]
    async fn body_is_parsed_whatever_the_content_type() {
        let request = Request::post("/courses/rust")
            .header("content-type", "text/plain")
            .body(Body::from(r#"{"shortname":"rust","title":"Rust"}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["rust"]["title"], "Rust");
    }

    #[tokio::test]
    async fn non_object_body_is_rejected() {
        let request = Request::post("/users/alice")
            .header("content-type", "application/json")
            .body(Body::from("[1, 2, 3]"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["body"]));
        assert_eq!(body["detail"][0]["type"], "invalid_type");
    }

    #[test]
    fn panic_payloads_become_500s() {
        let from_str = panic_to_response(Box::new("boom"));
        assert_eq!(from_str.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let from_string = panic_to_response(Box::new(String::from("boom")));
        assert_eq!(from_string.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let opaque = panic_to_response(Box::new(42_u8));
        assert_eq!(opaque.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
