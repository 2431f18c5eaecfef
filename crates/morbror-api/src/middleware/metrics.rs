//! # Request Counters
//!
//! Counts every request that reaches the course routes, and every response
//! with a 4xx or 5xx status. `/metrics` reads the same counters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Counter handles. Clones share the underlying atomics, so the instance
/// attached as an `Extension` and the one read by `/metrics` agree.
#[derive(Debug, Clone, Default)]
pub struct ApiMetrics {
    requests: Arc<AtomicU64>,
    failures: Arc<AtomicU64>,
}

impl ApiMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Responses with a client or server error status.
    pub fn errors(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    fn observe(&self, status: axum::http::StatusCode) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        if status.is_client_error() || status.is_server_error() {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Records the response status of each request. A request without an
/// `ApiMetrics` extension passes through uncounted.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let counters = request.extensions().get::<ApiMetrics>().cloned();
    let response = next.run(request).await;
    if let Some(counters) = counters {
        counters.observe(response.status());
    }
    response
}
