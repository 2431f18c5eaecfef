//! Integration test: validate the shipped course documents under `data/`
//! and check the fail-closed rules against them.
//!
//! Every shipped document must validate, and re-serializing the typed course
//! must reproduce the source document exactly. Removing or retyping any
//! required field must reject the document at that field's path.

use std::path::{Path, PathBuf};

use morbror_schema::{validate, Expected, FieldKind, ValidationError, COURSE};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Find the repository root.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn shipped_documents() -> Vec<(PathBuf, Value)> {
    let data_dir = repo_root().join("data");
    let mut docs: Vec<(PathBuf, Value)> = std::fs::read_dir(&data_dir)
        .expect("data/ directory must exist")
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .map(|p| {
            let text = std::fs::read_to_string(&p).unwrap();
            let value: Value = serde_json::from_str(&text).unwrap();
            (p, value)
        })
        .collect();
    docs.sort_by(|a, b| a.0.cmp(&b.0));
    docs
}

fn arduino() -> Value {
    let path = repo_root().join("data").join("arduino-grunnkurs.json");
    load(&path)
}

fn load(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// A value of a JSON type that `kind` never accepts.
fn wrong_value_for(kind: FieldKind) -> Value {
    match kind {
        FieldKind::String => json!(42),
        FieldKind::Integer => json!("1"),
        FieldKind::Boolean => json!("true"),
        FieldKind::StringList | FieldKind::List(_) => json!({}),
        FieldKind::Mapping => json!([]),
    }
}

#[test]
fn test_shipped_documents_exist() {
    assert!(
        shipped_documents().len() >= 2,
        "expected sample course documents under {}",
        repo_root().join("data").display()
    );
}

#[test]
fn test_shipped_documents_validate_and_round_trip() {
    for (path, doc) in shipped_documents() {
        let course = validate(doc.clone())
            .unwrap_or_else(|e| panic!("{} failed validation: {e}", path.display()));
        let reserialized = serde_json::to_value(&course).unwrap();
        assert_eq!(reserialized, doc, "{} lost data on round trip", path.display());
    }
}

#[test]
fn test_source_order_is_preserved() {
    let course = validate(arduino()).unwrap();
    let module_ids: Vec<_> = course.modules.iter().map(|m| m.module_id.as_str()).collect();
    assert_eq!(module_ids, ["kom-i-gang", "lys-og-farger"]);
    let block_types: Vec<_> = course.modules[0].lessons[1]
        .content_blocks
        .iter()
        .map(|b| b.block_type.as_str())
        .collect();
    assert_eq!(block_types, ["code", "quiz"]);
    assert_eq!(course.lesson_count(), 3);
}

#[test]
fn test_position_is_not_used_for_ordering() {
    let mut doc = arduino();
    doc["modules"][0]["position"] = json!(9);
    doc["modules"][1]["position"] = json!(0);
    let course = validate(doc).unwrap();
    assert_eq!(course.modules[0].module_id, "kom-i-gang");
    assert_eq!(course.modules[0].position, 9);
}

#[test]
fn test_missing_course_id_rejected() {
    let mut doc = arduino();
    doc.as_object_mut().unwrap().remove("courseId");
    assert_eq!(
        validate(doc).unwrap_err(),
        ValidationError::MissingField {
            path: "$.courseId".to_string(),
            expected: Expected::String,
        }
    );
}

#[test]
fn test_missing_nested_lessons_rejected() {
    let mut doc = arduino();
    doc["modules"][1].as_object_mut().unwrap().remove("lessons");
    let err = validate(doc).unwrap_err();
    assert_eq!(err.path(), "$.modules[1].lessons");
}

#[test]
fn test_extra_top_level_key_rejected() {
    let mut doc = arduino();
    doc["author"] = json!("Morbror Vetle");
    assert_eq!(
        validate(doc).unwrap_err(),
        ValidationError::UnexpectedField {
            path: "$.author".to_string()
        }
    );
}

proptest! {
    #[test]
    fn prop_dropping_any_course_field_rejects(index in 0..COURSE.fields.len()) {
        let field = COURSE.fields[index];
        let mut doc = arduino();
        doc.as_object_mut().unwrap().remove(field.name);
        let err = validate(doc).unwrap_err();
        let is_missing = matches!(err, ValidationError::MissingField { .. });
        prop_assert!(is_missing);
        prop_assert_eq!(err.path(), format!("$.{}", field.name));
    }

    #[test]
    fn prop_retyping_any_course_field_rejects(index in 0..COURSE.fields.len()) {
        let field = COURSE.fields[index];
        let mut doc = arduino();
        doc[field.name] = wrong_value_for(field.kind);
        let err = validate(doc).unwrap_err();
        let is_mismatch = matches!(err, ValidationError::TypeMismatch { .. });
        prop_assert!(is_mismatch);
        prop_assert_eq!(err.path(), format!("$.{}", field.name));
    }

    #[test]
    fn prop_arbitrary_strings_survive_round_trip(title in ".*", keyword in "[a-zæøå]{1,12}") {
        let mut doc = arduino();
        doc["title"] = json!(title);
        doc["voiceCommandKeywords"] = json!([keyword]);
        let course = validate(doc.clone()).unwrap();
        prop_assert_eq!(serde_json::to_value(&course).unwrap(), doc);
    }
}
