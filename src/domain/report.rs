//! Report accumulator
//!
//! Tags are appended in scan order and never sorted or deduplicated.

use std::io::{self, Write};

use serde::Serialize;

use super::tag::Tag;

/// Ordered, append-only collection of tags
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    tags: Vec<Tag>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tag
    pub fn push(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Writes the tags listing, one newline-terminated line per tag
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for tag in &self.tags {
            tag.write_to(out)?;
        }
        Ok(())
    }

    /// Renders the tags listing into a buffer
    pub fn render(&self) -> Vec<u8> {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut out);
        out
    }
}

impl Extend<Tag> for Report {
    fn extend<I: IntoIterator<Item = Tag>>(&mut self, iter: I) {
        self.tags.extend(iter);
    }
}
