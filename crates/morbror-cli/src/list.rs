//! # List Subcommand

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use morbror_catalog::LoadOrder;

/// Arguments for the `morbror list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory of course documents.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

/// Print one line per course the directory would serve, in load order.
///
/// Skipped files are reported through tracing at `warn`, not in the table.
pub fn run_list(args: &ListArgs, out: &mut dyn Write) -> Result<u8> {
    let (catalog, _) = morbror_catalog::load_with_report(&args.dir, LoadOrder::Sorted)
        .with_context(|| format!("failed to load {}", args.dir.display()))?;

    if catalog.is_empty() {
        writeln!(out, "No courses found in {}", args.dir.display())?;
        return Ok(0);
    }

    for course in catalog.get_all() {
        writeln!(
            out,
            "{}\t{}\t{} modules\t{} lessons",
            course.course_id,
            course.title,
            course.modules.len(),
            course.lesson_count()
        )?;
    }
    Ok(0)
}
