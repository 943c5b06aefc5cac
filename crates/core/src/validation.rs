//! Field-level validation model.
//!
//! Validation never stops at the first problem: every offending field is
//! collected into [`ValidationErrors`] so callers can report them together.

use serde::Serialize;
use thiserror::Error;

/// Longest accepted email address (RFC 5321 path limit minus brackets).
pub const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;
const EMAIL_DOMAIN_MAX_LEN: usize = 253;
const EMAIL_LABEL_MAX_LEN: usize = 63;
const EMAIL_LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~.-";

/// Stable machine-readable reason a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A required field or parameter was absent.
    Missing,
    /// The value had the wrong JSON type or could not be parsed (e.g. a date).
    InvalidType,
    /// The payload was not well-formed JSON.
    InvalidJson,
    /// A string exceeded its character limit.
    TooLong,
    /// A string was not a syntactically valid email address.
    InvalidEmail,
}

/// One rejected field.
///
/// `loc` is the location path of the field, starting with where it came
/// from (`"body"`, `"path"`), e.g. `["body", "title"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new<I, S>(loc: I, kind: FieldErrorKind, msg: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.into(),
            kind,
        }
    }

    /// Error located at `["body", field]`.
    pub fn body(field: &str, kind: FieldErrorKind, msg: impl Into<String>) -> Self {
        Self::new(["body", field], kind, msg)
    }

    /// Error located at `["path", param]`.
    pub fn path(param: &str, kind: FieldErrorKind, msg: impl Into<String>) -> Self {
        Self::new(["path", param], kind, msg)
    }

    /// Field name without its source prefix (`"title"` for `["body", "title"]`).
    pub fn field(&self) -> Option<&str> {
        self.loc.last().map(String::as_str)
    }
}

/// All field errors found while validating one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// `Ok(())` when nothing was collected, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self::single(error)
    }
}

/// Shapes that carry field constraints beyond what their types express.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Reject `value` if it is longer than `limit` characters.
pub fn max_chars(errors: &mut ValidationErrors, field: &str, value: &str, limit: usize) {
    let count = value.chars().count();
    if count > limit {
        errors.push(FieldError::body(
            field,
            FieldErrorKind::TooLong,
            format!("ensure this value has at most {limit} characters (got {count})"),
        ));
    }
}

/// Reject `value` unless it is a syntactically valid email address.
pub fn email(errors: &mut ValidationErrors, field: &str, value: &str) {
    if !is_valid_email(value) {
        errors.push(FieldError::body(
            field,
            FieldErrorKind::InvalidEmail,
            "value is not a valid email address",
        ));
    }
}

/// Syntactic email check: `local@domain` with a dot-atom local part and a
/// dotted hostname whose top-level label is not numeric.
pub fn is_valid_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_LEN {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && local.len() <= EMAIL_LOCAL_MAX_LEN
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || EMAIL_LOCAL_SPECIALS.contains(c))
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > EMAIL_DOMAIN_MAX_LEN {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_valid_label(label)) {
        return false;
    }
    labels
        .last()
        .is_some_and(|tld| !tld.chars().all(|c| c.is_ascii_digit()))
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= EMAIL_LABEL_MAX_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
