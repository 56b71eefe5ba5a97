//! Application state for shared services

use std::sync::Arc;

use crate::domain::course::CourseRepository;
use crate::domain::{Course, CourseDraft, DomainError};
use crate::infrastructure::course::{CourseService, InMemoryCourseRepository};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<dyn CourseServiceTrait>,
}

impl AppState {
    pub fn new(course_service: Arc<dyn CourseServiceTrait>) -> Self {
        Self { course_service }
    }

    /// State backed by a fresh, empty in-memory registry
    pub fn in_memory() -> Self {
        let repository = Arc::new(InMemoryCourseRepository::new());
        Self::new(Arc::new(CourseService::new(repository)))
    }
}

/// Trait for course registry operations
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CourseServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Course>, DomainError>;
    async fn create(&self, draft: CourseDraft) -> Result<Course, DomainError>;
    async fn get(&self, id: &str) -> Result<Course, DomainError>;
    async fn update(&self, id: &str, draft: CourseDraft) -> Result<Course, DomainError>;
    async fn delete(&self, id: &str) -> Result<Course, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R: CourseRepository + 'static> CourseServiceTrait for CourseService<R> {
    async fn list(&self) -> Result<Vec<Course>, DomainError> {
        CourseService::list(self).await
    }

    async fn create(&self, draft: CourseDraft) -> Result<Course, DomainError> {
        CourseService::create(self, draft).await
    }

    async fn get(&self, id: &str) -> Result<Course, DomainError> {
        CourseService::get(self, id).await
    }

    async fn update(&self, id: &str, draft: CourseDraft) -> Result<Course, DomainError> {
        CourseService::update(self, id, draft).await
    }

    async fn delete(&self, id: &str) -> Result<Course, DomainError> {
        CourseService::delete(self, id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        CourseService::count(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_states_are_isolated() {
        let first = AppState::in_memory();
        let second = AppState::in_memory();

        first
            .course_service
            .create(CourseDraft::new("Math", "A", 10))
            .await
            .unwrap();

        assert_eq!(first.course_service.list().await.unwrap().len(), 1);
        assert!(second.course_service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_registry() {
        let state = AppState::in_memory();
        let clone = state.clone();

        let created = state
            .course_service
            .create(CourseDraft::new("Math", "A", 10))
            .await
            .unwrap();

        let fetched = clone.course_service.get(created.id().as_str()).await.unwrap();
        assert_eq!(fetched, created);
    }
}
