//! Rule table for line classification
//!
//! Each rule pairs an anchored regular expression with the keyword and
//! kind marker written into the tag. Rules are independent: every rule is
//! tested against every line, so one line can produce several tags.

use std::fmt;

use once_cell::sync::Lazy;
use regex::bytes::Regex;
use serde::Serialize;

/// Tag kind marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Kind {
    /// Value-like constructs (`export default`, `props`, `data`, ...)
    #[serde(rename = "v")]
    Value,
    /// Function-like constructs
    #[serde(rename = "f")]
    Function,
}

impl Kind {
    /// Returns the single-character marker used in the tags file
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Value => "v",
            Kind::Function => "f",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled classification rule
#[derive(Debug)]
pub struct Rule {
    pattern: Regex,
    keyword: &'static str,
    kind: Kind,
}

impl Rule {
    fn new(pattern: &str, keyword: &'static str, kind: Kind) -> Self {
        Self {
            // Table patterns are literals checked by the tests below.
            pattern: Regex::new(pattern).unwrap_or_else(|e| {
                panic!("invalid built-in pattern for '{}': {}", keyword, e)
            }),
            keyword,
            kind,
        }
    }

    /// Returns true if the line matches this rule
    pub fn matches(&self, line: &[u8]) -> bool {
        self.pattern.is_match(line)
    }

    pub fn keyword(&self) -> &'static str {
        self.keyword
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }
}

/// Rule definitions in evaluation order: (pattern, keyword, kind)
///
/// `\s` stands for ASCII whitespace only (`[\t\n\f\r ]`); it is expanded
/// when the table is compiled.
const RULE_TABLE: [(&str, &str, Kind); 6] = [
    (r"^\s*export\s*default\s*\{$", "export", Kind::Value),
    (r"^\s*props:*", "props", Kind::Value),
    (r"^\s*data\s*\(\s*\)\s*\{$", "data", Kind::Value),
    (r"^\s*[a-zA-Z0-9_]+\s*\(*\)\s*\{$", "function", Kind::Function),
    (r"^\s*created\s*\(\s*\)\s*\{$", "created", Kind::Value),
    (r"^\s*computed:\s*\{$", "computed", Kind::Value),
];

const ASCII_SPACE: &str = r"[\t\n\f\r ]";

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    RULE_TABLE
        .iter()
        .map(|&(pattern, keyword, kind)| {
            Rule::new(&pattern.replace(r"\s", ASCII_SPACE), keyword, kind)
        })
        .collect()
});

/// Returns the rule table in evaluation order
pub fn rules() -> &'static [Rule] {
    &RULES
}
