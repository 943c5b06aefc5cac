//! Field-by-field reading of JSON request bodies.
//!
//! A derived `Deserialize` stops at the first bad field and its error carries
//! no reliable location. [`FieldReader`] pulls fields out of a JSON object one
//! at a time so that every missing or mistyped field ends up in the same
//! [`ValidationErrors`]. Field constraints run as soon as their field parses,
//! so a missing neighbour never hides them.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::validation::{FieldError, FieldErrorKind, ValidationErrors};

/// Shapes that can be built from an already-parsed JSON request body.
pub trait FromJsonBody: Sized {
    fn from_json_body(value: Value) -> Result<Self, ValidationErrors>;
}

/// Cursor over the fields of one JSON object.
#[derive(Debug)]
pub struct FieldReader {
    object: Map<String, Value>,
    errors: ValidationErrors,
}

impl FieldReader {
    /// Fails unless `value` is a JSON object.
    pub fn new(value: Value) -> Result<Self, ValidationErrors> {
        match value {
            Value::Object(object) => Ok(Self {
                object,
                errors: ValidationErrors::new(),
            }),
            other => Err(FieldError::new(
                ["body"],
                FieldErrorKind::InvalidType,
                format!("expected a JSON object, got {}", json_type_name(&other)),
            )
            .into()),
        }
    }

    /// Take a field that must be present and non-null.
    pub fn required<T: DeserializeOwned>(&mut self, name: &str) -> Option<T> {
        match self.object.remove(name) {
            None => {
                self.errors
                    .push(FieldError::body(name, FieldErrorKind::Missing, "field required"));
                None
            }
            Some(Value::Null) => {
                self.errors.push(FieldError::body(
                    name,
                    FieldErrorKind::InvalidType,
                    "field may not be null",
                ));
                None
            }
            Some(value) => self.convert(name, value),
        }
    }

    /// Like [`required`](Self::required), then run `rule` on the parsed value.
    pub fn required_with<T, F>(&mut self, name: &str, rule: F) -> Option<T>
    where
        T: DeserializeOwned,
        F: FnOnce(&mut ValidationErrors, &str, &T),
    {
        let value = self.required(name)?;
        rule(&mut self.errors, name, &value);
        Some(value)
    }

    /// Take a field that may be absent or null.
    pub fn optional<T: DeserializeOwned>(&mut self, name: &str) -> Option<T> {
        match self.object.remove(name) {
            None | Some(Value::Null) => None,
            Some(value) => self.convert(name, value),
        }
    }

    /// Errors collected so far; used when a required field is unavailable.
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    /// `value` if every field read cleanly, otherwise everything collected.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        self.errors.into_result().map(|()| value)
    }

    fn convert<T: DeserializeOwned>(&mut self, name: &str, value: Value) -> Option<T> {
        let found = json_type_name(&value);
        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                self.errors.push(FieldError::body(
                    name,
                    FieldErrorKind::InvalidType,
                    format!("invalid {found} value: {err}"),
                ));
                None
            }
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
