//! # Course Validation
//!
//! Walks a decoded JSON value against the [`COURSE`] schema table and, if
//! every field matches, converts it into a typed [`Course`].
//!
//! ## Design
//!
//! The walk is a single recursive function over [`EntitySchema`] tables, so
//! Course, Module, Lesson and ContentBlock are all checked by the same code.
//! The first violation aborts the walk. Within an object, declared fields are
//! checked in table order before unknown keys are looked for; array elements
//! are checked in index order. The reported error is therefore deterministic
//! for a given document.
//!
//! Paths are rendered JSONPath-style from the document root, e.g.
//! `$.modules[0].lessons[2].position`.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::model::Course;
use crate::schema::{EntitySchema, FieldKind, COURSE};

// ---------------------------------------------------------------------------
// Type descriptors
// ---------------------------------------------------------------------------

/// The JSON type a value actually has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Boolean,
    Integer,
    /// A number that is not an `i64` (fractional, or out of range).
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.as_i64().is_some() => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// The shape a value was required to have at the violating path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    String,
    Integer,
    Boolean,
    /// Any JSON object (free-form mapping).
    Object,
    /// A JSON array (element shape is checked separately).
    Array,
    /// An object matching the named entity schema.
    Entity(&'static str),
}

impl Expected {
    fn for_field(kind: FieldKind) -> Self {
        match kind {
            FieldKind::String => Self::String,
            FieldKind::Integer => Self::Integer,
            FieldKind::Boolean => Self::Boolean,
            FieldKind::Mapping => Self::Object,
            FieldKind::StringList | FieldKind::List(_) => Self::Array,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Integer => f.write_str("integer"),
            Self::Boolean => f.write_str("boolean"),
            Self::Object => f.write_str("object"),
            Self::Array => f.write_str("array"),
            Self::Entity(name) => write!(f, "{name} object"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Why a decoded document does not match the course schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent.
    #[error("{path}: missing required field (expected {expected})")]
    MissingField { path: String, expected: Expected },

    /// A value has the wrong JSON type.
    #[error("{path}: expected {expected}, found {actual}")]
    TypeMismatch {
        path: String,
        expected: Expected,
        actual: JsonType,
    },

    /// An object carries a key its schema does not declare.
    #[error("{path}: unexpected field")]
    UnexpectedField { path: String },

    /// The document passed the schema walk but did not convert to the typed
    /// model. Indicates the schema tables and the model have drifted apart.
    #[error("$: {0}")]
    Conversion(String),
}

impl ValidationError {
    /// JSONPath of the violating field.
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::UnexpectedField { path } => path,
            Self::Conversion(_) => "$",
        }
    }
}

/// Failure to turn raw document text into a [`Course`].
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The text is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The JSON does not match the course schema.
    #[error("schema violation at {0}")]
    Invalid(#[from] ValidationError),
}

// ---------------------------------------------------------------------------
// Path tracking
// ---------------------------------------------------------------------------

enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

/// Stack of segments from the document root to the value being checked.
/// Rendered only when an error is produced.
#[derive(Default)]
struct PathStack<'a>(Vec<Segment<'a>>);

impl<'a> PathStack<'a> {
    fn push_key(&mut self, key: &'a str) {
        self.0.push(Segment::Key(key));
    }

    fn push_index(&mut self, index: usize) {
        self.0.push(Segment::Index(index));
    }

    fn pop(&mut self) {
        self.0.pop();
    }

    fn render(&self) -> String {
        let mut out = String::from("$");
        for segment in &self.0 {
            match segment {
                Segment::Key(key) => {
                    out.push('.');
                    out.push_str(key);
                }
                Segment::Index(i) => {
                    out.push('[');
                    out.push_str(&i.to_string());
                    out.push(']');
                }
            }
        }
        out
    }

    fn render_child(&self, key: &str) -> String {
        format!("{}.{key}", self.render())
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Validate a decoded JSON value as a course document.
///
/// Returns the typed [`Course`] if every field of every nested entity is
/// present with the declared type and no undeclared keys appear. Otherwise
/// returns the first violation; no partial course is ever produced.
pub fn validate(raw: Value) -> Result<Course, ValidationError> {
    check_entity(&COURSE, &raw, &mut PathStack::default())?;

    // The walk above checks every constraint the typed model enforces, so
    // conversion only fails if the tables and the model disagree.
    serde_json::from_value(raw).map_err(|e| ValidationError::Conversion(e.to_string()))
}

/// Decode JSON text and validate it as a course document.
pub fn validate_str(text: &str) -> Result<Course, DocumentError> {
    let raw: Value = serde_json::from_str(text)?;
    Ok(validate(raw)?)
}

// ---------------------------------------------------------------------------
// Recursive walk
// ---------------------------------------------------------------------------

fn check_entity<'a>(
    schema: &EntitySchema,
    value: &'a Value,
    path: &mut PathStack<'a>,
) -> Result<(), ValidationError> {
    let Some(object) = value.as_object() else {
        return Err(ValidationError::TypeMismatch {
            path: path.render(),
            expected: Expected::Entity(schema.name),
            actual: JsonType::of(value),
        });
    };

    for field in schema.fields {
        path.push_key(field.name);
        let result = match object.get(field.name) {
            Some(field_value) => check_field(field.kind, field_value, path),
            None => Err(ValidationError::MissingField {
                path: path.render(),
                expected: Expected::for_field(field.kind),
            }),
        };
        path.pop();
        result?;
    }

    if let Some(key) = object.keys().find(|k| !schema.recognizes(k)) {
        return Err(ValidationError::UnexpectedField {
            path: path.render_child(key),
        });
    }

    Ok(())
}

fn check_field<'a>(
    kind: FieldKind,
    value: &'a Value,
    path: &mut PathStack<'a>,
) -> Result<(), ValidationError> {
    let matches = match kind {
        FieldKind::String => value.is_string(),
        FieldKind::Integer => value.as_i64().is_some(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Mapping => value.is_object(),
        FieldKind::StringList | FieldKind::List(_) => value.is_array(),
    };
    if !matches {
        return Err(ValidationError::TypeMismatch {
            path: path.render(),
            expected: Expected::for_field(kind),
            actual: JsonType::of(value),
        });
    }

    let Some(items) = value.as_array() else {
        return Ok(());
    };

    for (index, item) in items.iter().enumerate() {
        path.push_index(index);
        let result = match kind {
            FieldKind::List(element) => check_entity(element, item, path),
            FieldKind::StringList if !item.is_string() => Err(ValidationError::TypeMismatch {
                path: path.render(),
                expected: Expected::String,
                actual: JsonType::of(item),
            }),
            _ => Ok(()),
        };
        path.pop();
        result?;
    }

    Ok(())
}
