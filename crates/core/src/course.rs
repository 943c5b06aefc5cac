//! Course envelope.

use serde::{Deserialize, Serialize};

use crate::body::{FieldReader, FromJsonBody};
use crate::validation::{self, Validate, ValidationErrors};

pub const SHORTNAME_MAX_CHARS: usize = 20;
pub const TITLE_MAX_CHARS: usize = 150;

/// Opaque tag value; tags carry no declared element type.
pub type Tag = serde_json::Value;

/// A course as submitted by and echoed back to the caller.
///
/// `shortname` doubles as the course identifier in paths. Optional fields
/// that are missing or `null` deserialize to `None` and serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub shortname: String,
    pub title: String,
    pub description: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

impl Validate for Course {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validation::max_chars(&mut errors, "shortname", &self.shortname, SHORTNAME_MAX_CHARS);
        validation::max_chars(&mut errors, "title", &self.title, TITLE_MAX_CHARS);
        errors.into_result()
    }
}

impl FromJsonBody for Course {
    fn from_json_body(value: serde_json::Value) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(value)?;
        let shortname = fields.required_with("shortname", |errors, field, value: &String| {
            validation::max_chars(errors, field, value, SHORTNAME_MAX_CHARS)
        });
        let title = fields.required_with("title", |errors, field, value: &String| {
            validation::max_chars(errors, field, value, TITLE_MAX_CHARS)
        });
        let description = fields.optional("description");
        let tags = fields.optional("tags");

        let (Some(shortname), Some(title)) = (shortname, title) else {
            return Err(fields.into_errors());
        };
        fields.finish(Self {
            shortname,
            title,
            description,
            tags,
        })
    }
}
