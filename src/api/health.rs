//! Root and health check endpoints

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::types::{Json, MessageResponse};
use crate::SERVICE_NAME;

use super::state::AppState;

/// Health response with optional component status
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// GET / - confirms the API is up
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service is running", body = MessageResponse))
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!("{} is running", SERVICE_NAME),
    })
}

/// Simple health check - returns 200 if the service is running
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is running", body = HealthResponse))
)]
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check; verifies the course registry answers
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Registry reachable", body = HealthResponse),
        (status = 503, description = "Registry unavailable", body = HealthResponse),
    )
)]
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let registry_check = check_course_registry(&state).await;
    let overall_status = registry_check.status;

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![registry_check]),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    responses((status = 200, description = "Process is alive"))
)]
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn check_course_registry(state: &AppState) -> HealthCheck {
    let start = Instant::now();
    let result = state.course_service.count().await;
    let latency_ms = Some(start.elapsed().as_millis() as u64);

    match result {
        Ok(count) => HealthCheck {
            name: "course_registry".to_string(),
            status: HealthStatus::Healthy,
            message: Some(format!("{} courses registered", count)),
            latency_ms,
        },
        Err(e) => HealthCheck {
            name: "course_registry".to_string(),
            status: HealthStatus::Unhealthy,
            message: Some(e.to_string()),
            latency_ms,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::state::MockCourseServiceTrait;
    use crate::domain::DomainError;

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Unhealthy).unwrap(),
            "\"unhealthy\""
        );
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: HealthStatus::Healthy,
            version: "1.0.0".to_string(),
            checks: None,
            latency_ms: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"version\":\"1.0.0\""));
        assert!(!json.contains("checks"));
    }

    #[tokio::test]
    async fn test_root_message() {
        let Json(body) = root().await;
        assert_eq!(body.message, "Courses API is running");
    }

    #[tokio::test]
    async fn test_registry_check_healthy() {
        let check = check_course_registry(&AppState::in_memory()).await;

        assert_eq!(check.name, "course_registry");
        assert_eq!(check.status, HealthStatus::Healthy);
        assert_eq!(check.message.as_deref(), Some("0 courses registered"));
    }

    #[tokio::test]
    async fn test_registry_check_reports_count() {
        let state = AppState::in_memory();
        state
            .course_service
            .create(crate::domain::CourseDraft::new("Math", "A", 10))
            .await
            .unwrap();

        let check = check_course_registry(&state).await;
        assert_eq!(check.message.as_deref(), Some("1 courses registered"));
    }

    #[tokio::test]
    async fn test_registry_check_unhealthy() {
        let mut mock = MockCourseServiceTrait::new();
        mock.expect_count()
            .returning(|| Err(DomainError::storage("lock poisoned")));
        let state = AppState::new(Arc::new(mock));

        let check = check_course_registry(&state).await;
        assert_eq!(check.status, HealthStatus::Unhealthy);
        assert_eq!(
            check.message.as_deref(),
            Some("Storage error: lock poisoned")
        );

        let response = ready_check(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
