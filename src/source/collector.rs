//! Source file collection

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use super::path::{clean, path_bytes};
use super::ExcludeSet;

/// Extension of the files that are tagged
pub const VUE_EXTENSION: &str = ".vue";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExclude {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Produces the ordered list of files to scan
pub trait SourceCollector {
    fn collect(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>, SourceError>;
}

/// Depth-first filesystem walker.
///
/// A root is reported exactly as given; entries below it are cleaned, so
/// walking `.` yields `src/App.vue` rather than `./src/App.vue`. Excluded
/// directories are pruned with their whole subtree. The walk stops at the
/// first I/O error.
#[derive(Debug, Clone)]
pub struct WalkCollector {
    excludes: ExcludeSet,
    extension: String,
}

impl WalkCollector {
    /// Creates a collector for `.vue` files
    pub fn new(excludes: ExcludeSet) -> Self {
        Self::with_extension(excludes, VUE_EXTENSION)
    }

    pub fn with_extension(excludes: ExcludeSet, extension: impl Into<String>) -> Self {
        Self {
            excludes,
            extension: extension.into(),
        }
    }

    fn has_extension(&self, path: &Path) -> bool {
        path_bytes(path).ends_with(self.extension.as_bytes())
    }

    /// Collects matching files below a single root
    pub fn collect_root(&self, root: &Path) -> Result<Vec<PathBuf>, SourceError> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !self.excludes.is_excluded(&walk_path(entry)));

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            let path = walk_path(&entry);
            if self.has_extension(&path) {
                files.push(path);
            }
        }

        Ok(files)
    }
}

/// Path reported for a walked entry: the root as given, descendants cleaned
fn walk_path(entry: &DirEntry) -> PathBuf {
    if entry.depth() == 0 {
        entry.path().to_path_buf()
    } else {
        clean(entry.path())
    }
}

impl SourceCollector for WalkCollector {
    fn collect(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>, SourceError> {
        let mut files = Vec::new();
        for root in roots {
            files.extend(self.collect_root(root)?);
        }
        Ok(files)
    }
}
