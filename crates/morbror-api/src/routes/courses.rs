//! # Course Catalog API
//!
//! Read-only access to the courses loaded at startup. Listing returns
//! courses in load order; lookup by id returns 404 for unknown ids.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use morbror_schema::Course;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Banner returned by `GET /`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootMessage {
    pub message: String,
}

/// Build the courses router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/courses", get(list_courses))
        .route("/courses/{course_id}", get(get_course))
}

/// GET / — Service banner.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = RootMessage),
    ),
    tag = "courses"
)]
async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "MorbrorAppen Backend is running!".to_string(),
    })
}

/// GET /courses — List every loaded course.
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "All courses, in load order", body = Vec<Course>),
    ),
    tag = "courses"
)]
async fn list_courses(State(state): State<AppState>) -> Response {
    // Serialized straight from the shared catalog; no per-request copy.
    Json(state.catalog.get_all()).into_response()
}

/// GET /courses/{course_id} — Look up a single course.
#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    params(("course_id" = String, Path, description = "Course identifier (`courseId`)")),
    responses(
        (status = 200, description = "The course", body = Course),
        (status = 404, description = "No course with this id", body = ErrorBody),
    ),
    tag = "courses"
)]
async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Course>, AppError> {
    let course = state.catalog.get_by_id(&course_id)?;
    Ok(Json(course.clone()))
}
