//! # API Route Modules
//!
//! - `courses` — read-only course catalog: listing, lookup by id, and the
//!   root banner.
//! - `ops` — operational endpoints: request counters and catalog size.

pub mod courses;
pub mod ops;
