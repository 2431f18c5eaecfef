//! # Catalog Store
//!
//! Immutable, insertion-ordered collection of validated courses keyed by
//! `courseId`.

use std::collections::HashMap;

use morbror_schema::Course;

use crate::error::CatalogError;

/// The loaded course catalog.
///
/// Courses are kept in a `Vec` in load order with a side index from id to
/// position. Re-inserting an existing id replaces the course in place, so it
/// keeps the position of the first file that declared it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from courses in load order. Later duplicates win.
    #[cfg(test)]
    pub(crate) fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let mut catalog = Self::new();
        for course in courses {
            catalog.insert(course);
        }
        catalog
    }

    /// Insert a course, returning the one it replaced if the id existed.
    ///
    /// Only the loader builds catalogs; once handed out a catalog is never
    /// mutated again.
    pub(crate) fn insert(&mut self, course: Course) -> Option<Course> {
        match self.index.get(&course.course_id) {
            Some(&slot) => Some(std::mem::replace(&mut self.courses[slot], course)),
            None => {
                self.index.insert(course.course_id.clone(), self.courses.len());
                self.courses.push(course);
                None
            }
        }
    }

    /// Every loaded course, in load order.
    pub fn get_all(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by its `courseId`.
    pub fn get_by_id(&self, course_id: &str) -> Result<&Course, CatalogError> {
        self.index
            .get(course_id)
            .map(|&slot| &self.courses[slot])
            .ok_or_else(|| CatalogError::NotFound {
                course_id: course_id.to_string(),
            })
    }

    /// Whether a course with this id was loaded.
    pub fn contains(&self, course_id: &str) -> bool {
        self.index.contains_key(course_id)
    }

    /// Course ids in load order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(|c| c.course_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn course(id: &str, title: &str) -> Course {
        morbror_schema::validate(json!({
            "courseId": id,
            "title": title,
            "shortTitle": title,
            "description": "",
            "targetAgeRange": "8-12",
            "difficultyLevel": "nybegynner",
            "prerequisites": [],
            "estimatedCompletionTime": "1 time",
            "coverImage": "",
            "mascot": "",
            "badge": "",
            "voiceCommandKeywords": [],
            "parentNotes": "",
            "creationDate": "2025-01-01",
            "lastUpdated": "2025-01-01",
            "version": "1.0.0",
            "active": true,
            "ttsScriptOverrides": {},
            "hardwareRequirements": [],
            "modules": []
        }))
        .unwrap()
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get_all().is_empty());
        assert_eq!(catalog.ids().count(), 0);
    }

    #[test]
    fn get_all_preserves_insertion_order() {
        let catalog = Catalog::from_courses([
            course("zeta", "Z"),
            course("alpha", "A"),
            course("mid", "M"),
        ]);
        let ids: Vec<_> = catalog.ids().collect();
        assert_eq!(ids, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn duplicate_id_replaces_value_in_place() {
        let mut catalog = Catalog::from_courses([course("a", "first"), course("b", "B")]);
        let previous = catalog.insert(course("a", "second"));
        assert_eq!(previous.map(|c| c.title), Some("first".to_string()));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get_by_id("a").unwrap().title, "second");
        let ids: Vec<_> = catalog.ids().collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn get_by_id_unknown_is_not_found() {
        let catalog = Catalog::from_courses([course("a", "A")]);
        assert_eq!(
            catalog.get_by_id("nonexistent"),
            Err(CatalogError::NotFound {
                course_id: "nonexistent".to_string()
            })
        );
        assert!(!catalog.contains("nonexistent"));
        assert!(catalog.contains("a"));
    }

    #[test]
    fn not_found_display_names_the_course() {
        let err = CatalogError::NotFound {
            course_id: "xyz".to_string(),
        };
        assert_eq!(err.to_string(), "course xyz");
    }
}
