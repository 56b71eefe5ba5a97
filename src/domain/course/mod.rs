//! Course domain module
//!
//! A course is the only resource managed by the service. Courses live in an
//! ordered registry; their identifiers are generated server-side.

mod entity;
mod repository;

pub use entity::{Course, CourseDraft, CourseId, COURSE_NOT_FOUND};
pub use repository::CourseRepository;

#[cfg(test)]
pub use repository::mock;
