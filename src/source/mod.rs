//! # Source Collection
//!
//! Finds the files to tag and feeds their lines to the tag engine.
//!
//! ## Pipeline
//!
//! | Step | Type | Notes |
//! |------|------|-------|
//! | Exclusion | [`ExcludeSet`] | Regex patterns anchored at the path start |
//! | Traversal | [`WalkCollector`] | Depth-first, filtered by extension |
//! | Scanning | [`scan_files`] | Sequential, one open file at a time |
//!
//! ## Error Policy
//!
//! The first I/O error aborts the run. [`SourceCollector`] is the seam for
//! alternative policies; the tag engine does not depend on it.

mod path;
mod exclude;
mod collector;
mod scanner;

pub use exclude::ExcludeSet;
pub use collector::{SourceCollector, SourceError, WalkCollector, VUE_EXTENSION};
pub use scanner::{scan_file, scan_files};
