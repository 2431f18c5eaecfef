//! # Declarative Entity Schemas
//!
//! Static field tables for the four course entities. The validator walks
//! these tables; adding a field to the model means adding a row here.
//!
//! Field order in each table is the order in which violations are reported.

/// The JSON shape a single field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON string.
    String,
    /// JSON integer representable as `i64`.
    Integer,
    /// JSON `true` / `false`.
    Boolean,
    /// JSON array whose elements are all strings.
    StringList,
    /// JSON object with unconstrained contents.
    Mapping,
    /// JSON array whose elements all match a nested entity schema.
    List(&'static EntitySchema),
}

/// One required field of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// The complete set of fields an entity object must contain.
#[derive(Debug, PartialEq, Eq)]
pub struct EntitySchema {
    /// Entity name used in error messages.
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    /// Look up a field by its wire name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether `name` is one of this entity's recognized keys.
    pub fn recognizes(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

pub static CONTENT_BLOCK: EntitySchema = EntitySchema {
    name: "ContentBlock",
    fields: &[
        FieldSpec::new("type", FieldKind::String),
        FieldSpec::new("content", FieldKind::Mapping),
    ],
};

pub static LESSON: EntitySchema = EntitySchema {
    name: "Lesson",
    fields: &[
        FieldSpec::new("lessonId", FieldKind::String),
        FieldSpec::new("title", FieldKind::String),
        FieldSpec::new("position", FieldKind::Integer),
        FieldSpec::new("contentBlocks", FieldKind::List(&CONTENT_BLOCK)),
    ],
};

pub static MODULE: EntitySchema = EntitySchema {
    name: "Module",
    fields: &[
        FieldSpec::new("moduleId", FieldKind::String),
        FieldSpec::new("title", FieldKind::String),
        FieldSpec::new("position", FieldKind::Integer),
        FieldSpec::new("lessons", FieldKind::List(&LESSON)),
    ],
};

pub static COURSE: EntitySchema = EntitySchema {
    name: "Course",
    fields: &[
        FieldSpec::new("courseId", FieldKind::String),
        FieldSpec::new("title", FieldKind::String),
        FieldSpec::new("shortTitle", FieldKind::String),
        FieldSpec::new("description", FieldKind::String),
        FieldSpec::new("targetAgeRange", FieldKind::String),
        FieldSpec::new("difficultyLevel", FieldKind::String),
        FieldSpec::new("prerequisites", FieldKind::StringList),
        FieldSpec::new("estimatedCompletionTime", FieldKind::String),
        FieldSpec::new("coverImage", FieldKind::String),
        FieldSpec::new("mascot", FieldKind::String),
        FieldSpec::new("badge", FieldKind::String),
        FieldSpec::new("voiceCommandKeywords", FieldKind::StringList),
        FieldSpec::new("parentNotes", FieldKind::String),
        FieldSpec::new("creationDate", FieldKind::String),
        FieldSpec::new("lastUpdated", FieldKind::String),
        FieldSpec::new("version", FieldKind::String),
        FieldSpec::new("active", FieldKind::Boolean),
        FieldSpec::new("ttsScriptOverrides", FieldKind::Mapping),
        FieldSpec::new("hardwareRequirements", FieldKind::StringList),
        FieldSpec::new("modules", FieldKind::List(&MODULE)),
    ],
};
