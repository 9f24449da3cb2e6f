//! Output formatting for the tags listing

use std::io::{self, Write};

use crate::domain::Report;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated ctags listing
    #[default]
    Text,
    /// JSON array of tag objects
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Renders the report in the selected format.
    ///
    /// Text output carries file names and lines byte for byte; JSON output
    /// replaces bytes that are not UTF-8.
    pub fn render(&self, report: &Report) -> Vec<u8> {
        match self.format {
            OutputFormat::Text => report.render(),
            OutputFormat::Json => {
                // Serializing plain strings into a Vec cannot fail.
                let mut json = serde_json::to_vec(report).unwrap_or_else(|_| b"[]".to_vec());
                json.push(b'\n');
                json
            }
        }
    }

    /// Writes the report to stdout in one piece
    pub fn report(&self, report: &Report) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.render(report))?;
        stdout.flush()
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
