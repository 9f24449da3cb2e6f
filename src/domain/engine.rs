//! Tag engine
//!
//! Runs every rule of the table against each line. Rules never short-circuit
//! each other: a `created() {` line yields both a `function` and a `created`
//! tag, in table order.

use std::io::{self, BufRead};

use super::report::Report;
use super::rule::rules;
use super::tag::Tag;

/// Classifies one line, returning a tag for every rule it matches
pub fn classify_line(file: &[u8], line: &[u8]) -> Vec<Tag> {
    rules()
        .iter()
        .filter(|rule| rule.matches(line))
        .map(|rule| Tag::new(rule.keyword(), file, line, rule.kind()))
        .collect()
}

/// Feeds lines into a report
///
/// The engine holds no state of its own; the report is owned by the caller
/// and threaded through every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagEngine;

impl TagEngine {
    pub fn new() -> Self {
        Self
    }

    /// Classifies a line and appends the resulting tags to the report.
    /// Returns the number of tags added.
    pub fn scan_line(&self, report: &mut Report, file: &[u8], line: &[u8]) -> usize {
        let tags = classify_line(file, line);
        let added = tags.len();
        report.extend(tags);
        added
    }

    /// Scans every line of a reader.
    ///
    /// Lines are split on `\n` with a trailing `\r` removed. Line bytes are
    /// passed through untouched, whatever their encoding.
    pub fn scan_reader<R: BufRead>(
        &self,
        report: &mut Report,
        file: &[u8],
        mut reader: R,
    ) -> io::Result<usize> {
        let mut buf = Vec::new();
        let mut added = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }

            added += self.scan_line(report, file, &buf);
        }

        Ok(added)
    }
}
