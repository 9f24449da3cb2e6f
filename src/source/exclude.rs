//! Path exclusion patterns

use std::path::Path;

use regex::bytes::Regex;

use super::path::path_bytes;
use super::SourceError;

/// A set of exclusion patterns.
///
/// Each pattern is a regular expression implicitly anchored to the start of
/// the path, so `src/vendor` excludes `src/vendor/x.vue` and
/// `src/vendor2/y.vue` but not `app/src/vendor/z.vue`.
#[derive(Debug, Default, Clone)]
pub struct ExcludeSet {
    patterns: Vec<Regex>,
}

impl ExcludeSet {
    /// Compiles the given patterns
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, SourceError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(&format!("^{}", p)).map_err(|source| SourceError::InvalidExclude {
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Returns true if any pattern matches the path
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let path = path_bytes(path);
        self.patterns.iter().any(|re| re.is_match(&path))
    }
}
