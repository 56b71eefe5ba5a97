//! Domain layer - Course entity, repository contract and errors

pub mod course;
pub mod error;

pub use course::{Course, CourseDraft, CourseId, CourseRepository};
pub use error::DomainError;
