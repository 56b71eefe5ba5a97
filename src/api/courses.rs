//! Course endpoints

use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use tracing::debug;

use super::state::AppState;
use super::types::{ApiError, ApiErrorResponse, CourseRequest, CourseResponse, Json};

/// Create the course router
///
/// The collection answers both with and without a trailing slash.
pub fn create_courses_router() -> Router<AppState> {
    Router::new()
        .route("/cursos", get(list_courses).post(create_course))
        .route("/cursos/", get(list_courses).post(create_course))
        .route(
            "/cursos/{course_id}",
            get(get_course).put(update_course).delete(delete_course),
        )
}

/// GET /cursos/
#[utoipa::path(
    get,
    path = "/cursos/",
    tag = "cursos",
    responses(
        (status = 200, description = "All courses in insertion order", body = [CourseResponse]),
    )
)]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    debug!("Listing courses");

    let courses = state.course_service.list().await?;

    Ok(Json(courses.iter().map(CourseResponse::from).collect()))
}

/// POST /cursos/
#[utoipa::path(
    post,
    path = "/cursos/",
    tag = "cursos",
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course created with a generated id", body = CourseResponse),
        (status = 422, description = "Body does not match the course schema", body = ApiErrorResponse),
    )
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(request): Json<CourseRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = state.course_service.create(request.into()).await?;

    Ok(Json(CourseResponse::from(course)))
}

/// GET /cursos/{course_id}
#[utoipa::path(
    get,
    path = "/cursos/{course_id}",
    tag = "cursos",
    params(("course_id" = String, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "The course", body = CourseResponse),
        (status = 404, description = "No course with this id", body = ApiErrorResponse),
    )
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = state.course_service.get(&course_id).await?;

    Ok(Json(CourseResponse::from(course)))
}

/// PUT /cursos/{course_id}
#[utoipa::path(
    put,
    path = "/cursos/{course_id}",
    tag = "cursos",
    params(("course_id" = String, Path, description = "Course identifier")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course replaced; the id is kept", body = CourseResponse),
        (status = 404, description = "No course with this id", body = ApiErrorResponse),
        (status = 422, description = "Body does not match the course schema", body = ApiErrorResponse),
    )
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(request): Json<CourseRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = state
        .course_service
        .update(&course_id, request.into())
        .await?;

    Ok(Json(CourseResponse::from(course)))
}

/// DELETE /cursos/{course_id}
#[utoipa::path(
    delete,
    path = "/cursos/{course_id}",
    tag = "cursos",
    params(("course_id" = String, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "The removed course", body = CourseResponse),
        (status = 404, description = "No course with this id", body = ApiErrorResponse),
    )
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = state.course_service.delete(&course_id).await?;

    Ok(Json(CourseResponse::from(course)))
}
