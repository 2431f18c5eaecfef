//! # Middleware
//!
//! Tower middleware applied to the API router:
//!
//! - `cors` — browser cross-origin policy for the course frontend.
//! - `metrics` — request and error counters.

pub mod cors;
pub mod metrics;
