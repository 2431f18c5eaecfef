//! # Operational Endpoints
//!
//! Plain-text counters in Prometheus exposition format. Mounted outside the
//! metrics middleware so scrapes do not count themselves.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};

use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

/// Build the ops router.
pub fn router() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics))
}

/// GET /metrics — Request counters and catalog size.
async fn metrics(
    State(state): State<AppState>,
    Extension(metrics): Extension<ApiMetrics>,
) -> impl IntoResponse {
    let body = format!(
        "# TYPE morbror_http_requests_total counter\n\
         morbror_http_requests_total {}\n\
         # TYPE morbror_http_errors_total counter\n\
         morbror_http_errors_total {}\n\
         # TYPE morbror_catalog_courses gauge\n\
         morbror_catalog_courses {}\n",
        metrics.requests(),
        metrics.errors(),
        state.catalog.len(),
    );
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}
