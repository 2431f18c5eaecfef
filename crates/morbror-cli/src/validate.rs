//! # Validate Subcommand
//!
//! Runs course documents through the same decode and schema checks the
//! server applies at startup, without starting the server.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use morbror_catalog::{LoadOrder, LoadReport, SkipReason};

/// Arguments for the `morbror validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Course document or directory of course documents.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every document is valid, 1 when any document
/// is rejected. Operational failures are returned as errors.
pub fn run_validate(args: &ValidateArgs, out: &mut dyn Write) -> Result<u8> {
    let path = &args.path;
    if !path.exists() {
        bail!("path not found: {}", path.display());
    }

    if path.is_dir() {
        validate_directory(path, out)
    } else {
        validate_file(path, out)
    }
}

fn validate_file(path: &Path, out: &mut dyn Write) -> Result<u8> {
    match morbror_catalog::load_file(path) {
        Ok(course) => {
            writeln!(
                out,
                "OK: {} ({}, {} modules, {} lessons)",
                path.display(),
                course.course_id,
                course.modules.len(),
                course.lesson_count()
            )?;
            Ok(0)
        }
        Err(reason) if is_operational(&reason) => Err(anyhow::Error::new(reason))
            .with_context(|| format!("failed to read {}", path.display())),
        Err(reason) => {
            writeln!(out, "FAIL: {}: {}", path.display(), reason)?;
            Ok(1)
        }
    }
}

/// Whether a file failure is about the environment rather than the document.
///
/// Text that is not UTF-8 is a document defect; any other I/O failure
/// (permissions, a vanished file) is operational.
fn is_operational(reason: &SkipReason) -> bool {
    matches!(reason, SkipReason::Unreadable(e) if e.kind() != ErrorKind::InvalidData)
}

fn validate_directory(dir: &Path, out: &mut dyn Write) -> Result<u8> {
    let (_, report) = morbror_catalog::load_with_report(dir, LoadOrder::Sorted)
        .with_context(|| format!("failed to load {}", dir.display()))?;

    print_report(&report, dir, out)?;

    if report.skipped.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn print_report(report: &LoadReport, dir: &Path, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "Courses: {}/{} passed",
        report.files_loaded, report.files_seen
    )?;

    for skipped in &report.skipped {
        let rel = skipped.file.strip_prefix(dir).unwrap_or(&skipped.file);
        writeln!(out, "  FAIL: {}: {}", rel.display(), skipped.reason)?;
    }

    for o in &report.overrides {
        let replaced = o.replaced.strip_prefix(dir).unwrap_or(&o.replaced);
        let file = o.file.strip_prefix(dir).unwrap_or(&o.file);
        writeln!(
            out,
            "  WARN: courseId {:?} in {} replaces {}",
            o.course_id,
            file.display(),
            replaced.display()
        )?;
    }

    if !report.skipped.is_empty() {
        writeln!(
            out,
            "\n{} file(s) failed validation out of {} total.",
            report.skipped.len(),
            report.files_seen
        )?;
    }
    Ok(())
}
