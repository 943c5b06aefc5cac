use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use sigma_core::{FieldError, ValidationErrors};

/// Errors a handler or extractor can hand back to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Path or body failed schema validation.
    #[error("request validation failed")]
    Validation(#[from] ValidationErrors),

    /// Something the server did not expect (e.g. a caught panic).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<FieldError> for ApiError {
    fn from(value: FieldError) -> Self {
        Self::Validation(value.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                tracing::debug!(fields = errors.len(), "request rejected by validation");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    axum::Json(json!({
                        "error": "validation_error",
                        "message": "request validation failed",
                        "detail": errors,
                    })),
                )
                    .into_response()
            }
            Self::Internal(msg) => {
                tracing::error!(%msg, "internal server error");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
            }
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
