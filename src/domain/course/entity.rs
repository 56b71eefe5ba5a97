//! Course entity and related types

use serde::{Deserialize, Serialize};

/// Message carried by every lookup miss
pub const COURSE_NOT_FOUND: &str = "Course not found";

/// Course identifier, an opaque string assigned by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Wrap an existing identifier, e.g. one taken from a request path
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random (UUID v4) identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CourseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<CourseId> for String {
    fn from(id: CourseId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every client-controlled field of a course
///
/// Used both for creation and for wholesale replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    pub name: String,
    pub description: Option<String>,
    pub level: String,
    pub duration: i64,
}

impl CourseDraft {
    pub fn new(name: impl Into<String>, level: impl Into<String>, duration: i64) -> Self {
        Self {
            name: name.into(),
            description: None,
            level: level.into(),
            duration,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Course entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    name: String,
    description: Option<String>,
    level: String,
    duration: i64,
}

impl Course {
    /// Build a course from its identifier and field values
    pub fn new(id: CourseId, draft: CourseDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            level: draft.level,
            duration: draft.duration,
        }
    }

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn duration(&self) -> i64 {
        self.duration
    }

    /// Replace every field except the identifier
    pub fn replace(&mut self, draft: CourseDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.level = draft.level;
        self.duration = draft.duration;
    }
}
