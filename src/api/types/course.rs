//! Course wire types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Course, CourseDraft};

/// Body of create and update requests
///
/// An `id` in the body is ignored: ids come from the server on creation and
/// from the path on update. Legacy Spanish field names are accepted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CourseRequest {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
    #[serde(alias = "nivel")]
    pub level: String,
    #[serde(alias = "duracion")]
    pub duration: i64,
}

impl From<CourseRequest> for CourseDraft {
    fn from(request: CourseRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            level: request.level,
            duration: request.duration,
        }
    }
}

/// Course as returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CourseResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub level: String,
    pub duration: i64,
}

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().as_str().to_string(),
            name: course.name().to_string(),
            description: course.description().map(String::from),
            level: course.level().to_string(),
            duration: course.duration(),
        }
    }
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self::from(&course)
    }
}

/// `{ "message": ... }` body of the root endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
