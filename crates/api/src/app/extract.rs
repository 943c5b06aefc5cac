//! Request extractors whose rejections are validation errors (422) rather
//! than axum's default 400/415 plain-text responses.

use axum::body::Bytes;
use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use sigma_core::{FieldError, FieldErrorKind, FromJsonBody};

use crate::app::errors::ApiError;

/// JSON body read field by field and checked against its constraints.
///
/// The body is parsed as JSON whatever the `Content-Type` says.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: FromJsonBody,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            FieldError::new(["body"], FieldErrorKind::InvalidJson, rejection.body_text())
        })?;
        if bytes.is_empty() {
            return Err(FieldError::new(["body"], FieldErrorKind::Missing, "request body required").into());
        }

        let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(|err| {
            FieldError::new(
                ["body"],
                FieldErrorKind::InvalidJson,
                format!("body is not valid JSON: {err}"),
            )
        })?;

        Ok(Self(T::from_json_body(value)?))
    }
}

/// Path parameters, percent-decoded.
#[derive(Debug)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(path_rejection(rejection)),
        }
    }
}

fn path_rejection(rejection: PathRejection) -> ApiError {
    let key = match &rejection {
        PathRejection::FailedToDeserializePathParams(err) => match err.kind() {
            ErrorKind::ParseErrorAtKey { key, .. }
            | ErrorKind::InvalidUtf8InPathParam { key }
            | ErrorKind::DeserializeError { key, .. } => Some(key.clone()),
            _ => None,
        },
        _ => None,
    };
    let msg = rejection.body_text();

    let error = match key {
        Some(key) => FieldError::path(&key, FieldErrorKind::InvalidType, msg),
        None => FieldError::new(["path"], FieldErrorKind::InvalidType, msg),
    };
    error.into()
}
