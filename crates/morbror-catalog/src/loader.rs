//! # Catalog Loader
//!
//! Startup-time construction of the [`Catalog`] from a directory of course
//! documents.
//!
//! ## Load Sequence
//!
//! 1. **Enumerate** — list the directory once (non-recursive) and keep
//!    regular files whose name ends in `.json`.
//! 2. **Order** — keep the order the filesystem reported, or sort by file
//!    name when [`LoadOrder::Sorted`] is requested.
//! 3. **Read → decode → validate** each file. Any failure is logged at
//!    `warn` with the file name, recorded in the [`LoadReport`], and the file
//!    is skipped.
//! 4. **Index** — insert by `courseId`. A later file with the same id
//!    replaces the earlier course and the override is logged.
//!
//! Only step 1 can fail the whole load.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use morbror_schema::Course;

use crate::error::{LoadError, ParseLoadOrderError, SkipReason};
use crate::store::Catalog;

// ---------------------------------------------------------------------------
// Load order
// ---------------------------------------------------------------------------

/// Order in which course files are processed.
///
/// Matters only when two files declare the same `courseId`: the file
/// processed last wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadOrder {
    /// Whatever order the operating system lists directory entries in.
    /// Not guaranteed stable across platforms or filesystems.
    #[default]
    Filesystem,
    /// Lexicographic by file name.
    Sorted,
}

impl LoadOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Filesystem => "filesystem",
            Self::Sorted => "sorted",
        }
    }
}

impl fmt::Display for LoadOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadOrder {
    type Err = ParseLoadOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filesystem" => Ok(Self::Filesystem),
            "sorted" => Ok(Self::Sorted),
            _ => Err(ParseLoadOrderError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Load report
// ---------------------------------------------------------------------------

/// A course file that was left out of the catalog.
#[derive(Debug)]
pub struct SkippedFile {
    pub file: PathBuf,
    pub reason: SkipReason,
}

/// A `courseId` declared by more than one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub course_id: String,
    /// File whose course was replaced.
    pub replaced: PathBuf,
    /// File whose course is now in the catalog.
    pub file: PathBuf,
}

/// What happened during a load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of `.json` files considered.
    pub files_seen: usize,
    /// Number of files that validated (including ones later overridden).
    pub files_loaded: usize,
    pub skipped: Vec<SkippedFile>,
    pub overrides: Vec<Override>,
}

impl LoadReport {
    /// Whether every file considered made it into the catalog unchallenged.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.overrides.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Load every valid course document in `dir`, in filesystem order.
///
/// # Errors
///
/// Returns [`LoadError`] only if the directory is missing, not a directory,
/// or cannot be listed. Individual bad files are skipped, never fatal; a
/// directory without valid files yields an empty catalog.
pub fn load(dir: &Path) -> Result<Catalog, LoadError> {
    load_with_report(dir, LoadOrder::Filesystem).map(|(catalog, _)| catalog)
}

/// Load every valid course document in `dir` and report what was skipped.
pub fn load_with_report(dir: &Path, order: LoadOrder) -> Result<(Catalog, LoadReport), LoadError> {
    let files = course_files(dir, order)?;

    let mut catalog = Catalog::new();
    let mut sources: HashMap<String, PathBuf> = HashMap::new();
    let mut report = LoadReport {
        files_seen: files.len(),
        ..LoadReport::default()
    };

    for path in files {
        let name = display_name(&path);
        let course = match load_file(&path) {
            Ok(course) => course,
            Err(reason) => {
                tracing::warn!(file = %name, error = %reason, "skipping course document");
                report.skipped.push(SkippedFile { file: path, reason });
                continue;
            }
        };

        report.files_loaded += 1;
        let course_id = course.course_id.clone();
        if catalog.insert(course).is_some() {
            let replaced = sources.get(&course_id).cloned().unwrap_or_default();
            tracing::warn!(
                course_id = %course_id,
                replaced = %display_name(&replaced),
                file = %name,
                "duplicate courseId, later file wins"
            );
            report.overrides.push(Override {
                course_id: course_id.clone(),
                replaced,
                file: path.clone(),
            });
        }
        sources.insert(course_id, path);
    }

    tracing::info!(
        dir = %dir.display(),
        order = %order,
        files = report.files_seen,
        courses = catalog.len(),
        skipped = report.skipped.len(),
        "course catalog loaded"
    );

    Ok((catalog, report))
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// List the `.json` regular files directly inside `dir`.
fn course_files(dir: &Path, order: LoadOrder) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.exists() {
        return Err(LoadError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory {
            path: dir.display().to_string(),
        });
    }

    let io_err = |source: std::io::Error| LoadError::Io {
        path: dir.display().to_string(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        // Byte-level suffix match so names that are not valid UTF-8 still load.
        let is_json = path
            .file_name()
            .is_some_and(|n| n.as_encoded_bytes().ends_with(b".json"));
        if is_json && path.is_file() {
            files.push(path);
        }
    }

    if order == LoadOrder::Sorted {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    Ok(files)
}

/// Read, decode and validate a single course document.
pub fn load_file(path: &Path) -> Result<Course, SkipReason> {
    let text = std::fs::read_to_string(path)?;
    Ok(morbror_schema::validate_str(&text)?)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_order_parses_case_insensitively() {
        assert_eq!("sorted".parse::<LoadOrder>(), Ok(LoadOrder::Sorted));
        assert_eq!(" Filesystem ".parse::<LoadOrder>(), Ok(LoadOrder::Filesystem));
        assert_eq!(
            "random".parse::<LoadOrder>(),
            Err(ParseLoadOrderError("random".to_string()))
        );
    }

    #[test]
    fn load_order_defaults_to_filesystem() {
        assert_eq!(LoadOrder::default(), LoadOrder::Filesystem);
        assert_eq!(LoadOrder::Sorted.to_string(), "sorted");
    }

    #[test]
    fn display_name_uses_file_name() {
        assert_eq!(display_name(Path::new("/srv/data/kurs.json")), "kurs.json");
    }

    #[test]
    fn empty_report_is_clean() {
        assert!(LoadReport::default().is_clean());
    }
}
