use crate::options::{Mode, OutputFormat, SortOrder};
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// File to read; standard input when `None`.
    #[builder(default)]
    pub input: Option<PathBuf>,

    #[builder(default)]
    pub mode: Mode,
    #[builder(default)]
    pub order: SortOrder,
    #[builder(default)]
    pub format: OutputFormat,

    /// Keep only the first N entries of the sorted table.
    #[builder(default)]
    pub top_n: Option<usize>,
    /// Drop words seen fewer than this many times.
    #[builder(default = "1")]
    pub min_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            mode: Mode::default(),
            order: SortOrder::default(),
            format: OutputFormat::default(),
            top_n: None,
            min_count: 1,
        }
    }
}
