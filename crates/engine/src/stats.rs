use serde::Serialize;

use crate::table::WordEntry;

/// Outcome of a single run, one variant per [`crate::options::Mode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunResult {
    /// Number of words in the input.
    Total(usize),
    /// Frequency table in the requested order.
    Frequencies(Vec<WordEntry>),
}

impl RunResult {
    pub fn total(&self) -> Option<usize> {
        match self {
            Self::Total(n) => Some(*n),
            Self::Frequencies(_) => None,
        }
    }

    pub fn frequencies(&self) -> Option<&[WordEntry]> {
        match self {
            Self::Total(_) => None,
            Self::Frequencies(entries) => Some(entries),
        }
    }
}
