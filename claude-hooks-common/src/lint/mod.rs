//! Lint gating for files touched by a hook event.
//!
//! - [`request`]: extracts file paths from the event and filters by extension
//! - [`runner`]: probes and invokes the external linter

pub mod request;
pub mod runner;

pub use request::{extract_files, filter_by_extension, parse_request};
pub use runner::{LintMode, LintOutcome, LintReport, LintRunner};
