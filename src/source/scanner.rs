//! Sequential file scanning

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::domain::{Report, TagEngine};

use super::path::path_bytes;
use super::SourceError;

/// Scans one file into the report, returning the number of tags added.
///
/// The file handle is dropped before returning, on success and on error.
pub fn scan_file(engine: &TagEngine, path: &Path, report: &mut Report) -> Result<usize, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    engine
        .scan_reader(report, &path_bytes(path), BufReader::new(file))
        .map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Scans files in order, calling `on_file` after each one.
///
/// Stops at the first error; tags from earlier files stay in the report but
/// callers are expected to discard it.
pub fn scan_files<F>(files: &[PathBuf], report: &mut Report, mut on_file: F) -> Result<(), SourceError>
where
    F: FnMut(&Path, usize),
{
    let engine = TagEngine::new();
    for path in files {
        let added = scan_file(&engine, path, report)?;
        on_file(path, added);
    }
    Ok(())
}
