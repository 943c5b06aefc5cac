use std::collections::HashMap;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use sigma_core::Course;

use crate::app::extract::{PathParam, ValidatedJson};
use crate::app::schemas::{CourseSchema, ValidationErrorSchema};

pub fn router() -> Router {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/courses/{shortname}", get(get_course).post(create_course))
}

/// Placeholder listing; there is no catalogue behind it.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseListing {
    #[schema(example = "Courses")]
    pub courses: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseRef {
    #[schema(example = "my_course")]
    pub course: String,
}

/// Get all courses available
#[utoipa::path(
    get,
    path = "/courses",
    tag = "courses",
    responses(
        (status = 200, description = "Placeholder listing", body = CourseListing)
    )
)]
pub async fn list_courses() -> Json<CourseListing> {
    Json(CourseListing {
        courses: "Courses".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/courses/{shortname}",
    tag = "courses",
    params(
        ("shortname" = String, Path, description = "The title of the course")
    ),
    responses(
        (status = 200, description = "The requested shortname", body = CourseRef),
        (status = 422, description = "Invalid path parameter", body = ValidationErrorSchema)
    )
)]
pub async fn get_course(PathParam(shortname): PathParam<String>) -> Json<CourseRef> {
    tracing::debug!(%shortname, "echoing course shortname");
    Json(CourseRef { course: shortname })
}

/// Echo a course keyed by its path shortname. Nothing is stored.
#[utoipa::path(
    post,
    path = "/courses/{shortname}",
    tag = "courses",
    params(
        ("shortname" = String, Path, description = "The title of the course")
    ),
    request_body = CourseSchema,
    responses(
        (status = 201, description = "The submitted course keyed by the path shortname", body = HashMap<String, CourseSchema>),
        (status = 422, description = "Validation error", body = ValidationErrorSchema)
    )
)]
pub async fn create_course(
    PathParam(shortname): PathParam<String>,
    ValidatedJson(course): ValidatedJson<Course>,
) -> (StatusCode, Json<HashMap<String, Course>>) {
    tracing::debug!(%shortname, body_shortname = %course.shortname, "echoing submitted course");
    (StatusCode::CREATED, Json(HashMap::from([(shortname, course)])))
}
