//! User envelopes: an input view that carries a secret and an output view
//! that never does.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::body::{FieldReader, FromJsonBody};
use crate::validation::{self, Validate, ValidationErrors};

pub const USERNAME_MAX_CHARS: usize = 20;
pub const PASSWORD_MAX_CHARS: usize = 20;

/// Public view of a user. Every user response is serialized through this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBasic {
    pub username: String,
    pub email: String,
    pub birth_date: NaiveDate,
}

impl Validate for UserBasic {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_public_fields(&mut errors, &self.username, &self.email);
        errors.into_result()
    }
}

/// User as submitted on creation.
///
/// Deserialize-only: the password must never reach a response, so the only
/// way out of this type is [`UserBasic::from`].
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct UserIn {
    pub username: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub password: String,
}

impl core::fmt::Debug for UserIn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UserIn")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("birth_date", &self.birth_date)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Validate for UserIn {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_public_fields(&mut errors, &self.username, &self.email);
        validation::max_chars(&mut errors, "password", &self.password, PASSWORD_MAX_CHARS);
        errors.into_result()
    }
}

impl FromJsonBody for UserIn {
    fn from_json_body(value: serde_json::Value) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(value)?;
        let username = fields.required_with("username", |errors, field, value: &String| {
            validation::max_chars(errors, field, value, USERNAME_MAX_CHARS)
        });
        let email = fields.required_with("email", |errors, field, value: &String| {
            validation::email(errors, field, value)
        });
        let birth_date = fields.required("birth_date");
        let password = fields.required_with("password", |errors, field, value: &String| {
            validation::max_chars(errors, field, value, PASSWORD_MAX_CHARS)
        });

        let (Some(username), Some(email), Some(birth_date), Some(password)) =
            (username, email, birth_date, password)
        else {
            return Err(fields.into_errors());
        };
        fields.finish(Self {
            username,
            email,
            birth_date,
            password,
        })
    }
}

impl From<UserIn> for UserBasic {
    fn from(user: UserIn) -> Self {
        let UserIn {
            username,
            email,
            birth_date,
            password: _,
        } = user;
        Self {
            username,
            email,
            birth_date,
        }
    }
}

fn validate_public_fields(errors: &mut ValidationErrors, username: &str, email: &str) {
    validation::max_chars(errors, "username", username, USERNAME_MAX_CHARS);
    validation::email(errors, "email", email);
}
