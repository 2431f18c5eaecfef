//! # morbror-catalog — Course Loader & Store
//!
//! Loads the course catalog once at startup and answers read-only queries
//! for the rest of the process lifetime.
//!
//! ## Loader (`loader`)
//!
//! [`load`] enumerates `*.json` files in a directory (non-recursive), decodes
//! and validates each through `morbror-schema`, and indexes the survivors by
//! `courseId`. Per-file failures are logged and skipped; only a missing or
//! unreadable directory is an error. [`load_with_report`] additionally
//! returns a [`LoadReport`] describing every skipped file and every
//! duplicate-id override.
//!
//! ## Store (`store`)
//!
//! [`Catalog`] is immutable after construction. Courses iterate in load
//! order; lookups by id return [`CatalogError::NotFound`] for unknown ids.
//! Share it across request handlers as `Arc<Catalog>`; no locking is needed.
//!
//! ## Crate Policy
//!
//! - One malformed file never prevents the rest from loading.
//! - No filesystem writes, no reload, no mutation after load.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod loader;
pub mod store;

pub use error::{CatalogError, LoadError, ParseLoadOrderError, SkipReason};
pub use loader::{load, load_file, load_with_report, LoadOrder, LoadReport, Override, SkippedFile};
pub use store::Catalog;
