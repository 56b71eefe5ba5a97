//! Course service for course management

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::course::{Course, CourseDraft, CourseId, CourseRepository, COURSE_NOT_FOUND};
use crate::domain::DomainError;

/// Course service, the registry's entry point
///
/// Generates identifiers on creation and turns lookup misses into
/// `DomainError::NotFound`.
#[derive(Debug)]
pub struct CourseService<R: CourseRepository> {
    repository: Arc<R>,
}

impl<R: CourseRepository> CourseService<R> {
    /// Create a new course service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List every course in insertion order
    pub async fn list(&self) -> Result<Vec<Course>, DomainError> {
        self.repository.list().await
    }

    /// Create a course with a freshly generated id
    pub async fn create(&self, draft: CourseDraft) -> Result<Course, DomainError> {
        let course = Course::new(CourseId::generate(), draft);
        info!(id = %course.id(), name = %course.name(), "Creating course");

        self.repository.create(course).await
    }

    /// Get a course by ID
    pub async fn get(&self, id: &str) -> Result<Course, DomainError> {
        debug!(id = %id, "Getting course");

        self.repository
            .get(&CourseId::new(id))
            .await?
            .ok_or_else(|| DomainError::not_found(COURSE_NOT_FOUND))
    }

    /// Replace every field of a course; the id always stays the one given here
    pub async fn update(&self, id: &str, draft: CourseDraft) -> Result<Course, DomainError> {
        info!(id = %id, name = %draft.name, "Updating course");

        self.repository
            .update(&CourseId::new(id), draft)
            .await?
            .ok_or_else(|| DomainError::not_found(COURSE_NOT_FOUND))
    }

    /// Delete a course, returning the removed record
    pub async fn delete(&self, id: &str) -> Result<Course, DomainError> {
        info!(id = %id, "Deleting course");

        self.repository
            .delete(&CourseId::new(id))
            .await?
            .ok_or_else(|| DomainError::not_found(COURSE_NOT_FOUND))
    }

    /// Number of stored courses
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}
