//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "MorbrorAppen Course API",
        description = "Read-only access to the Morbror course catalog: courses, modules, lessons and content blocks.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::courses::root,
        crate::routes::courses::list_courses,
        crate::routes::courses::get_course,
    ),
    components(schemas(
        morbror_schema::Course,
        morbror_schema::Module,
        morbror_schema::Lesson,
        morbror_schema::ContentBlock,
        crate::routes::courses::RootMessage,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "courses", description = "Course catalog"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
