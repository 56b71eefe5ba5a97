//! In-memory course repository

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::course::{Course, CourseDraft, CourseId, CourseRepository};
use crate::domain::DomainError;

/// Thread-safe, insertion-ordered course collection
///
/// Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryCourseRepository {
    courses: RwLock<Vec<Course>>,
}

impl InMemoryCourseRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with courses, kept in the given order
    #[cfg(test)]
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: RwLock::new(courses),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Course>>, DomainError> {
        self.courses
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Course>>, DomainError> {
        self.courses
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn list(&self) -> Result<Vec<Course>, DomainError> {
        Ok(self.read()?.clone())
    }

    async fn create(&self, course: Course) -> Result<Course, DomainError> {
        self.write()?.push(course.clone());
        Ok(course)
    }

    async fn get(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        Ok(self.read()?.iter().find(|c| c.id() == id).cloned())
    }

    async fn update(
        &self,
        id: &CourseId,
        draft: CourseDraft,
    ) -> Result<Option<Course>, DomainError> {
        let mut courses = self.write()?;

        // First match only; position in the collection is preserved
        Ok(courses.iter_mut().find(|c| c.id() == id).map(|course| {
            course.replace(draft);
            course.clone()
        }))
    }

    async fn delete(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        let mut courses = self.write()?;
        let position = courses.iter().position(|c| c.id() == id);

        Ok(position.map(|index| courses.remove(index)))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.read()?.len())
    }
}
