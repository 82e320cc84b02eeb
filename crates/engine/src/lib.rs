// crates/engine/src/lib.rs
use log::debug;
use std::io::BufRead;

pub mod config;
pub mod error;
pub mod input;
pub mod options;
pub mod sorter;
pub mod stats;
pub mod table;
pub mod tokenizer;

use crate::config::Config;
use crate::error::Result;
use crate::options::Mode;
use crate::stats::RunResult;
use crate::table::WordTable;

pub use crate::table::WordEntry;

/// Open the configured input and run the selected mode over it.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or a read fails part way. Nothing is
/// produced in either case.
pub fn run(config: &Config) -> Result<RunResult> {
    let reader = input::open(config.input.as_deref())?;
    run_reader(config, reader)
}

/// Run the selected mode over an already opened stream.
///
/// # Errors
///
/// Returns [`error::EngineError::Read`] if the stream fails.
pub fn run_reader<R: BufRead>(config: &Config, mut reader: R) -> Result<RunResult> {
    match config.mode {
        Mode::Count => tokenizer::count_total(&mut reader).map(RunResult::Total),
        Mode::Frequency => {
            let table = WordTable::try_from_words(tokenizer::tokenize(reader))?;
            debug!(
                "{} distinct words, {} total",
                table.len(),
                table.total()
            );
            Ok(RunResult::Frequencies(frequency_table(table, config)))
        }
    }
}

/// Consume `table` into the sorted, filtered list the frequency mode prints.
pub fn frequency_table(table: WordTable, config: &Config) -> Vec<WordEntry> {
    let min_count = config.min_count;
    let entries = table
        .into_iter()
        .filter(|entry| entry.count.value() >= min_count);

    let mut sorted = sorter::sort(entries, config.order.comparator());
    if let Some(n) = config.top_n {
        sorted.truncate(n);
    }
    sorted
}
