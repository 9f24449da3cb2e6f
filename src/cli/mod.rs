//! # Command-Line Interface
//!
//! Argument parsing, option resolution and output.
//!
//! ## Usage
//!
//! ```bash
//! vtags [options] [source_file(s)]
//! vtags -R --exclude=src/vendor src > tags
//! ```
//!
//! ## Output Formats
//!
//! - `text` (default) - `keyword<TAB>file<TAB>/^line$/;"<TAB>kind` per tag
//! - `json` - JSON array of tag objects
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for progress on stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and write the listing.

mod app;
mod args;
mod options;
mod output;

pub use app::{run, run_from, Cli, CliError};
pub use args::normalize;
pub use options::Options;
pub use output::{Output, OutputFormat};
