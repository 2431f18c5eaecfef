//! # morbror-api — Axum API Service for the Morbror Course Catalog
//!
//! Serves the course catalog loaded at startup to the MorbrorAppen
//! frontend. Every course endpoint is read-only: the catalog is built once
//! from the course directory and shared immutably across requests.
//!
//! ## API Surface
//!
//! | Route                   | Module                  | Purpose                |
//! |-------------------------|-------------------------|------------------------|
//! | `/`                     | [`routes::courses`]     | Service banner         |
//! | `/courses`              | [`routes::courses`]     | List all courses       |
//! | `/courses/{course_id}`  | [`routes::courses`]     | Single course or 404   |
//! | `/openapi.json`         | [`openapi`]             | OpenAPI document       |
//! | `/metrics`              | [`routes::ops`]         | Request counters       |
//! | `/health/*`             | this module             | Liveness and readiness |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CorsLayer → TraceLayer → CatchPanicLayer → MetricsMiddleware → Handler
//! ```
//!
//! Health probes and `/metrics` sit outside the metrics middleware.

pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();
    let cors = middleware::cors::layer(&state.config.cors_allowed_origins);

    // Counted API routes.
    let api = Router::new()
        .merge(routes::courses::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(Extension(metrics.clone()));

    // Probes and scrapes.
    let ops = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .merge(routes::ops::router())
        .layer(Extension(metrics));

    Router::new()
        .merge(ops)
        .merge(api)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — the catalog is loaded before the listener binds, so a
/// serving process is always ready.
async fn readiness() -> &'static str {
    "ready"
}
