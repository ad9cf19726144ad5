// src/id.rs

//! Task identifiers.
//!
//! Source tables present identifiers as raw tokens: some are plain numbers
//! ("4", "12"), some are labels ("QA", "pour foundation"). We normalize each
//! token once, at the ingestion boundary, so that "4" in an element column
//! and "4" in a predecessor cell always compare equal, and so that the rest
//! of the crate never has to reason about token spelling again.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Matches tokens that are entirely an (optionally sign-prefixed) integer.
static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("static regex"));

/// Normalized task identifier.
///
/// The variant order matters: deriving `Ord` puts every `Num` before every
/// `Label`, numbers compare numerically and labels lexicographically. This
/// is the total order used for all tie-breaking in the layout, so it must
/// stay stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskId {
    /// Identifier whose source token was entirely numeric.
    Num(i64),
    /// Any other token, kept with its original spelling (trimmed).
    Label(String),
}

impl TaskId {
    /// Normalize a raw source token into a `TaskId`.
    ///
    /// Surrounding whitespace is stripped first. A token that is entirely an
    /// integer becomes `Num`; everything else (including integers too large
    /// for `i64`) stays a `Label`.
    pub fn normalize(token: &str) -> TaskId {
        let token = token.trim();
        if NUMERIC_TOKEN.is_match(token) {
            if let Ok(n) = token.parse::<i64>() {
                return TaskId::Num(n);
            }
        }
        TaskId::Label(token.to_string())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Num(n) => write!(f, "{n}"),
            TaskId::Label(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for TaskId {
    fn from(n: i64) -> Self {
        TaskId::Num(n)
    }
}

impl From<&str> for TaskId {
    fn from(token: &str) -> Self {
        TaskId::normalize(token)
    }
}
