//! Request, response and error types of the HTTP API

pub mod course;
pub mod error;
pub mod json;

pub use course::{CourseRequest, CourseResponse, MessageResponse};
pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use json::Json;
