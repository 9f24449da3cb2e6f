//! Legacy switch normalization
//!
//! `-es5`, `+es5`, `-es6` and `+es6` predate the long-option syntax and
//! would otherwise be read as `-e` exclusions. They are rewritten to long
//! flags before clap parses the command line. A bare `-e` is an empty
//! exclusion and never takes the following argument as its pattern.

use std::ffi::OsString;

fn rewrite(arg: &str) -> Option<&'static str> {
    match arg {
        "-es5" => Some("--es5"),
        "+es5" => Some("--no-es5"),
        "-es6" => Some("--es6"),
        "+es6" => Some("--no-es6"),
        "-e" => Some("--exclude="),
        _ => None,
    }
}

/// Rewrites legacy switches, passing every other argument through
pub fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str().and_then(rewrite) {
            Some(long) => OsString::from(long),
            None => arg,
        })
        .collect()
}
