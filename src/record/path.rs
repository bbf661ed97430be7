//! Dotted field paths
//!
//! `debtor_info.state` is split on `.` into segments that are walked one
//! hop at a time by [`Record::resolve`](super::Record::resolve).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed dotted field path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parses a dotted path. Segments are kept verbatim, so empty or padded
    /// segments never resolve.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = raw.split('.').map(str::to_string).collect();
        Self { raw, segments }
    }

    /// Returns the path as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the individual hops
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl From<String> for FieldPath {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl From<&str> for FieldPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.raw
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
