//! OpenAPI document, served as `/openapi.json` and browsable under `/docs`.

use utoipa::OpenApi;

use crate::app::routes::{self, courses, users};
use crate::app::schemas::{
    CourseSchema, FieldErrorSchema, UserBasicSchema, UserInSchema, ValidationErrorSchema,
};

pub const OPENAPI_PATH: &str = "/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "sigma",
        description = "Echo API for courses and users. Nothing is stored; every response is built from the validated request."
    ),
    paths(
        routes::system::root,
        courses::list_courses,
        courses::get_course,
        courses::create_course,
        users::get_user,
        users::create_user,
    ),
    components(schemas(
        CourseSchema,
        UserBasicSchema,
        UserInSchema,
        FieldErrorSchema,
        ValidationErrorSchema,
        courses::CourseListing,
        courses::CourseRef,
    )),
    tags(
        (name = "courses", description = "Course envelopes"),
        (name = "users", description = "User envelopes; passwords are accepted but never returned")
    )
)]
pub struct ApiDoc;
