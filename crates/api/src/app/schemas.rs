//! OpenAPI schema definitions for the `sigma-core` shapes.
//!
//! Core types stay free of utoipa. The wrappers here mirror their fields and
//! constraints for documentation only; nothing is ever built from them.

use utoipa::ToSchema;

/// A course as submitted and echoed back.
#[derive(ToSchema)]
#[schema(
    as = Course,
    example = json!({
        "shortname": "my_course",
        "title": "A very nice course",
        "description": "This is not very useful course yet",
        "tags": ["easy", "unuseful"]
    })
)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CourseSchema {
    #[schema(max_length = 20)]
    shortname: String,
    #[schema(max_length = 150)]
    title: String,
    description: Option<String>,
    #[schema(schema_with = related_tags_schema)]
    tags: Option<Vec<serde_json::Value>>,
}

/// Schema for `CourseSchema::tags`; utoipa has no field-level `title`
/// attribute, so the generated `Option<Vec<Value>>` schema is rebuilt here
/// with the "Related tags" title attached.
fn related_tags_schema() -> utoipa::openapi::schema::Array {
    use utoipa::openapi::schema::{ArrayBuilder, ObjectBuilder, SchemaType, Type};
    ArrayBuilder::new()
        .schema_type(SchemaType::from_iter([Type::Array, Type::Null]))
        .items(ObjectBuilder::new().schema_type(SchemaType::AnyValue))
        .title(Some("Related tags"))
        .build()
}

/// Public view of a user.
#[derive(ToSchema)]
#[schema(as = UserBasic)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserBasicSchema {
    #[schema(max_length = 20, example = "alice")]
    username: String,
    #[schema(example = "alice@example.com")]
    email: String,
    birth_date: chrono::NaiveDate,
}

/// User as submitted on creation.
#[derive(ToSchema)]
#[schema(as = UserIn)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserInSchema {
    #[schema(max_length = 20, example = "alice")]
    username: String,
    #[schema(example = "alice@example.com")]
    email: String,
    birth_date: chrono::NaiveDate,
    #[schema(max_length = 20, format = Password)]
    password: String,
}

/// One rejected field.
#[derive(ToSchema)]
#[schema(as = FieldError)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct FieldErrorSchema {
    /// Location of the field, e.g. `["body", "title"]`.
    loc: Vec<String>,
    msg: String,
    /// One of `missing`, `invalid_type`, `invalid_json`, `too_long`, `invalid_email`.
    #[schema(example = "too_long")]
    r#type: String,
}

/// 422 response payload.
#[derive(ToSchema)]
#[schema(as = ValidationError)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ValidationErrorSchema {
    #[schema(example = "validation_error")]
    error: String,
    message: String,
    detail: Vec<FieldErrorSchema>,
}
