//! # morbror-schema — Course Document Schema & Validation
//!
//! Defines the four-level course hierarchy served by the catalog
//! (Course → Module → Lesson → ContentBlock) and the validator that turns an
//! arbitrary decoded JSON value into a typed [`Course`].
//!
//! ## Schema (`schema`)
//!
//! Each entity is described by a static table of field name → [`FieldKind`].
//! The tables are data, not reflection: [`COURSE`], [`MODULE`], [`LESSON`] and
//! [`CONTENT_BLOCK`] are interpreted by one generic recursive walker.
//!
//! ## Validation (`validate`)
//!
//! - [`validate`] — checks a `serde_json::Value` against [`COURSE`] and
//!   returns the typed [`Course`] or the first [`ValidationError`] found.
//! - [`validate_str`] — decode + validate in one step, for single files.
//!
//! ## Crate Policy
//!
//! - Validation is fail-closed: a document is accepted whole or not at all.
//! - Every field is required, no field may be `null`, unknown keys are
//!   rejected. Only `content` and `ttsScriptOverrides` are free-form.
//! - Errors carry the JSON path of the violating field and the expected vs.
//!   actual JSON type.

pub mod model;
pub mod schema;
pub mod validate;

pub use model::{ContentBlock, Course, Lesson, Module};
pub use schema::{EntitySchema, FieldKind, FieldSpec, CONTENT_BLOCK, COURSE, LESSON, MODULE};
pub use validate::{validate, validate_str, DocumentError, Expected, JsonType, ValidationError};
