use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<count><TAB><word>` lines under a header
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Order of the frequency table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum SortOrder {
    /// Least frequent first
    #[default]
    #[value(alias = "ascending")]
    Asc,
    /// Most frequent first
    #[value(alias = "descending")]
    Desc,
}
