//! Main CLI application structure

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use thiserror::Error;

use super::args::normalize;
use super::options::Options;
use super::output::{Output, OutputFormat};
use crate::domain::Report;
use crate::source::{scan_files, ExcludeSet, SourceCollector, WalkCollector};

#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("no files specified. try \"vtags --help\"")]
    NoSources,

    #[error("cannot open input file {0:?} : no such file or directory")]
    MissingInput(PathBuf),
}

#[derive(Parser, Debug)]
#[command(name = "vtags")]
#[command(author, version, about = "Generate ctags-style tags for Vue single-file components")]
#[command(override_usage = "vtags [options] [source_file(s)]")]
#[command(args_override_self = true)]
pub struct Cli {
    /// Add pattern to a list of excluded files and directories
    #[arg(long, short = 'e', value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Recurse into directories in the file list
    #[arg(long, short = 'r', short_alias = 'R')]
    pub recurse: bool,

    /// Enable ES5 mode (also `-es5`)
    #[arg(long = "es5", overrides_with = "no_es5")]
    pub es5: bool,

    /// Disable ES5 mode (also `+es5`)
    #[arg(long = "no-es5", overrides_with = "es5")]
    pub no_es5: bool,

    /// Enable ES6 mode (also `-es6`)
    #[arg(long = "es6", overrides_with = "no_es6")]
    pub es6: bool,

    /// Disable ES6 mode (also `+es6`)
    #[arg(long = "no-es6", overrides_with = "es6")]
    pub no_es6: bool,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Source files or directories
    #[arg(value_name = "SOURCE")]
    pub sources: Vec<PathBuf>,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    run_from(std::env::args_os())
}

/// Runs with an explicit argument list (first item is the program name)
pub fn run_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = Cli::parse_from(normalize(args));
    let options = Options::from(cli);
    let output = Output::new(options.format, options.verbose);

    output.verbose("vtags starting");
    output.verbose_ctx(
        "options",
        &format!(
            "recurse={}, es5={}, es6={}, exclude={:?}",
            options.recurse, options.es5, options.es6, options.exclude
        ),
    );

    validate(&options)?;

    let report = generate(&options, &output)?;
    output.verbose(&format!("Generated {} tags", report.len()));
    output.report(&report).context("Failed to write tags")?;

    output.verbose("Completed successfully");
    Ok(())
}

/// Checks that sources were given and that each one exists
pub fn validate(options: &Options) -> Result<(), CliError> {
    if let Some(missing) = options.sources.iter().find(|path| !path.exists()) {
        return Err(CliError::MissingInput(missing.clone()));
    }
    if options.sources.is_empty() {
        return Err(CliError::NoSources);
    }
    Ok(())
}

/// Collects and scans every source, returning the complete report
pub fn generate(options: &Options, output: &Output) -> Result<Report> {
    let excludes = ExcludeSet::new(options.exclude.as_slice())?;
    let collector = WalkCollector::new(excludes);

    for root in &options.sources {
        output.verbose_ctx("collect", &format!("Walking {}", root.display()));
    }
    let files = collector
        .collect(&options.sources)
        .context("Failed to collect source files")?;
    output.verbose_ctx("collect", &format!("Found {} source files", files.len()));

    let mut report = Report::new();
    scan_files(&files, &mut report, |path, added| {
        output.verbose_ctx("scan", &format!("{}: {} tags", path.display(), added));
    })
    .context("Failed to scan source files")?;

    Ok(report)
}
