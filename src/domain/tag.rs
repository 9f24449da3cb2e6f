//! Tag records
//!
//! A tag ties a keyword to a file and a search pattern that relocates the
//! exact source line: `/^<line>$/;"`. File names and lines are kept as raw
//! bytes so the listing reproduces them exactly, including indentation and
//! text that is not UTF-8.

use std::io::{self, Write};

use serde::{Serialize, Serializer};

use super::rule::Kind;

/// A single entry in the tags listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub keyword: &'static str,
    #[serde(serialize_with = "lossy")]
    pub file: Vec<u8>,
    #[serde(serialize_with = "lossy")]
    pub pattern: Vec<u8>,
    pub kind: Kind,
}

impl Tag {
    /// Creates a tag for a matched line
    pub fn new(keyword: &'static str, file: &[u8], line: &[u8], kind: Kind) -> Self {
        Self {
            keyword,
            file: file.to_vec(),
            pattern: search_pattern(line),
            kind,
        }
    }

    /// Writes the tab-separated tag line, newline included
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.keyword.as_bytes())?;
        out.write_all(b"\t")?;
        out.write_all(&self.file)?;
        out.write_all(b"\t")?;
        out.write_all(&self.pattern)?;
        out.write_all(b"\t")?;
        out.write_all(self.kind.as_str().as_bytes())?;
        out.write_all(b"\n")
    }
}

/// Frames a line as an anchored literal search: `/^line$/;"`
pub fn search_pattern(line: &[u8]) -> Vec<u8> {
    let mut pattern = Vec::with_capacity(line.len() + 6);
    pattern.extend_from_slice(b"/^");
    pattern.extend_from_slice(line);
    pattern.extend_from_slice(b"$/;\"");
    pattern
}

// JSON strings must be UTF-8.
fn lossy<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}
