//! `sigma-core`: course and user envelopes and their field constraints.
//!
//! This crate contains **pure domain** shapes (no HTTP, no I/O). Nothing here
//! is stored: every value lives for a single request.

pub mod body;
pub mod course;
pub mod user;
pub mod validation;

pub use body::{FieldReader, FromJsonBody};
pub use course::{Course, Tag};
pub use user::{UserBasic, UserIn};
pub use validation::{FieldError, FieldErrorKind, Validate, ValidationErrors};
