//! # morbror-cli — CLI Tool for the Morbror Course Catalog
//!
//! Provides the `morbror` command-line interface for course authors: check
//! a course directory before deploying it, and see what the server would
//! serve from it.
//!
//! ## Subcommands
//!
//! - `morbror validate <PATH>` — Validate one course document or every
//!   `*.json` document in a directory.
//! - `morbror list <DIR>` — Print the courses a directory would load.
//!
//! Directories are always processed in sorted file-name order so that
//! duplicate-id resolution is the same on every machine.
//!
//! ## Exit Codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Success                                   |
//! | 1    | At least one course document was rejected |
//! | 2    | Operational error (missing path, I/O)     |

pub mod list;
pub mod validate;
