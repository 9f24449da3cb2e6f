//! Tag engine domain
//!
//! Classifies source lines against a fixed rule table and accumulates the
//! resulting tags. Contains no filesystem access.

mod rule;
mod tag;
mod report;
mod engine;

pub use rule::{rules, Kind, Rule};
pub use tag::{search_pattern, Tag};
pub use report::Report;
pub use engine::{classify_line, TagEngine};
