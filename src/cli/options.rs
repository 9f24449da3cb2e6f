//! Resolved run options

use std::path::PathBuf;

use super::app::Cli;
use super::output::OutputFormat;

/// Options for a single run, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Exclusion patterns, in the order given
    pub exclude: Vec<String>,
    /// Recurse flag (`-R`); directories are always walked in full
    pub recurse: bool,
    pub es5: bool,
    pub es6: bool,
    pub sources: Vec<PathBuf>,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            recurse: false,
            es5: true,
            es6: false,
            sources: Vec::new(),
            format: OutputFormat::Text,
            verbose: false,
        }
    }
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        Self {
            exclude: cli.exclude,
            recurse: cli.recurse,
            // Toggles override each other, so at most one of each pair is set.
            es5: !cli.no_es5,
            es6: cli.es6 && !cli.no_es6,
            sources: cli.sources,
            format: cli.format,
            verbose: cli.verbose,
        }
    }
}
