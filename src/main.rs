//! vtags - ctags-style tags for Vue single-file components

use std::process::ExitCode;

/// Exit status for every failure (usage, missing input, I/O)
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    if let Err(e) = vtags::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::SUCCESS
    }
}
