//! OpenAPI description of the HTTP API

use utoipa::OpenApi;

use super::health::{HealthCheck, HealthResponse, HealthStatus};
use super::types::{
    ApiErrorDetail, ApiErrorResponse, ApiErrorType, CourseRequest, CourseResponse, Json,
    MessageResponse,
};
use super::{courses, health};
use crate::{SERVICE_DESCRIPTION, SERVICE_NAME};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        health::health_check,
        health::ready_check,
        health::live_check,
        courses::list_courses,
        courses::create_course,
        courses::get_course,
        courses::update_course,
        courses::delete_course,
    ),
    components(schemas(
        CourseRequest,
        CourseResponse,
        MessageResponse,
        ApiErrorResponse,
        ApiErrorDetail,
        ApiErrorType,
        HealthResponse,
        HealthCheck,
        HealthStatus,
    )),
    tags(
        (name = "cursos", description = "Course registry"),
        (name = "health", description = "Service status checks"),
    )
)]
pub struct ApiDoc;

/// Build the document, with the service name, description and package version as `info`
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = SERVICE_NAME.to_string();
    doc.info.description = Some(SERVICE_DESCRIPTION.to_string());
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    doc
}

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(api_doc())
}
