//! # Course Model
//!
//! Typed representation of a validated course document. Field names on the
//! wire are camelCase and match the source JSON exactly, so serializing a
//! [`Course`] reproduces the document it was validated from.
//!
//! Values of these types are only produced by [`crate::validate`]; they are
//! built once at load time and never mutated afterwards.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One renderable unit inside a lesson.
///
/// The shape of `content` depends on `type` (text, image, code, quiz, ...)
/// and is deliberately not checked beyond being a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ContentBlock {
    /// Block type tag, e.g. `"text"` or `"image"`.
    #[serde(rename = "type")]
    pub block_type: String,
    /// Free-form payload for the block.
    #[schema(value_type = Object)]
    pub content: Map<String, Value>,
}

/// A lesson within a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Lesson {
    pub lesson_id: String,
    pub title: String,
    /// Ordering hint. Not used for sorting; source order is authoritative.
    pub position: i64,
    pub content_blocks: Vec<ContentBlock>,
}

/// A module within a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Module {
    pub module_id: String,
    pub title: String,
    /// Ordering hint. Not used for sorting; source order is authoritative.
    pub position: i64,
    pub lessons: Vec<Lesson>,
}

/// A complete course document.
///
/// `course_id` is the catalog key. Everything else is descriptive metadata
/// passed through to clients unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Course {
    pub course_id: String,
    pub title: String,
    pub short_title: String,
    pub description: String,
    pub target_age_range: String,
    pub difficulty_level: String,
    pub prerequisites: Vec<String>,
    pub estimated_completion_time: String,
    pub cover_image: String,
    pub mascot: String,
    pub badge: String,
    pub voice_command_keywords: Vec<String>,
    pub parent_notes: String,
    pub creation_date: String,
    pub last_updated: String,
    pub version: String,
    pub active: bool,
    /// Per-phrase text-to-speech overrides. Free-form.
    #[schema(value_type = Object)]
    pub tts_script_overrides: Map<String, Value>,
    pub hardware_requirements: Vec<String>,
    pub modules: Vec<Module>,
}

impl Course {
    /// Total number of lessons across all modules.
    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }
}
