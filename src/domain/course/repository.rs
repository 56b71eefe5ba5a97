//! Course repository trait

use async_trait::async_trait;

use super::entity::{Course, CourseDraft, CourseId};
use crate::domain::DomainError;

/// Ordered collection of courses
///
/// Implementations keep insertion order and look records up by scanning for
/// the first matching id. Absence is reported as `Ok(None)`; mapping it to a
/// not-found error is the caller's job.
#[async_trait]
pub trait CourseRepository: Send + Sync + std::fmt::Debug {
    /// List all courses in insertion order
    async fn list(&self) -> Result<Vec<Course>, DomainError>;

    /// Append a course to the end of the collection
    async fn create(&self, course: Course) -> Result<Course, DomainError>;

    /// Get a course by ID
    async fn get(&self, id: &CourseId) -> Result<Option<Course>, DomainError>;

    /// Replace every field but the id of the matching course, in place
    async fn update(
        &self,
        id: &CourseId,
        draft: CourseDraft,
    ) -> Result<Option<Course>, DomainError>;

    /// Remove the matching course and return it
    async fn delete(&self, id: &CourseId) -> Result<Option<Course>, DomainError>;

    /// Number of stored courses
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Mock repository that can be switched into a failing mode
    #[derive(Debug, Default)]
    pub struct MockCourseRepository {
        courses: Mutex<Vec<Course>>,
        error: Mutex<Option<String>>,
    }

    impl MockCourseRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every subsequent call fail with a storage error
        pub fn fail_with(&self, message: impl Into<String>) {
            *self.error.lock().unwrap() = Some(message.into());
        }

        fn check(&self) -> Result<(), DomainError> {
            match self.error.lock().unwrap().as_ref() {
                Some(message) => Err(DomainError::storage(message.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl CourseRepository for MockCourseRepository {
        async fn list(&self) -> Result<Vec<Course>, DomainError> {
            self.check()?;
            Ok(self.courses.lock().unwrap().clone())
        }

        async fn create(&self, course: Course) -> Result<Course, DomainError> {
            self.check()?;
            self.courses.lock().unwrap().push(course.clone());
            Ok(course)
        }

        async fn get(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
            self.check()?;
            let courses = self.courses.lock().unwrap();
            Ok(courses.iter().find(|c| c.id() == id).cloned())
        }

        async fn update(
            &self,
            id: &CourseId,
            draft: CourseDraft,
        ) -> Result<Option<Course>, DomainError> {
            self.check()?;
            let mut courses = self.courses.lock().unwrap();

            Ok(courses.iter_mut().find(|c| c.id() == id).map(|course| {
                course.replace(draft);
                course.clone()
            }))
        }

        async fn delete(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
            self.check()?;
            let mut courses = self.courses.lock().unwrap();
            let position = courses.iter().position(|c| c.id() == id);
            Ok(position.map(|index| courses.remove(index)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockCourseRepository;
    use super::*;

    fn course(id: &str, name: &str) -> Course {
        Course::new(CourseId::new(id), CourseDraft::new(name, "A", 10))
    }

    #[tokio::test]
    async fn test_mock_create_and_get() {
        let repo = MockCourseRepository::new();
        repo.create(course("c-1", "Math")).await.unwrap();

        let fetched = repo.get(&CourseId::new("c-1")).await.unwrap();
        assert_eq!(fetched.unwrap().name(), "Math");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_mock_failure_mode() {
        let repo = MockCourseRepository::new();
        repo.fail_with("boom");

        let result = repo.list().await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
