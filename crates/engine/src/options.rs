use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::table::WordEntry;

/// What a run produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Total number of words in the input
    #[default]
    Count,
    /// Per-word frequency table
    Frequency,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Direction of the frequency table, by occurrence count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Strict "a comes before b" comparator for this direction.
    #[inline]
    pub fn precedes(self, a: &WordEntry, b: &WordEntry) -> bool {
        match self {
            Self::Ascending => a.count < b.count,
            Self::Descending => a.count > b.count,
        }
    }

    /// The same comparator as a plain closure, for [`crate::sorter::sort`].
    pub fn comparator(self) -> impl Fn(&WordEntry, &WordEntry) -> bool {
        move |a, b| self.precedes(a, b)
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!("Unknown sort order: {other}")),
        }
    }
}
