// crates/cli/src/presentation.rs
use std::io::Write;

use words_engine::WordEntry;
use words_engine::options::OutputFormat;
use words_engine::stats::RunResult;

use crate::error::Result;

/// Write `result` to `out` in the requested format.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_result<W: Write>(out: &mut W, result: &RunResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, result),
        OutputFormat::Json => write_json(out, result),
    }
}

fn write_text<W: Write>(out: &mut W, result: &RunResult) -> Result<()> {
    match result {
        RunResult::Total(total) => {
            writeln!(out, "The total number of words is: {total}")?;
        }
        RunResult::Frequencies(entries) => {
            writeln!(out, "The frequencies of each word are: ")?;
            write_entries(out, entries)?;
        }
    }
    Ok(())
}

fn write_entries<W: Write>(out: &mut W, entries: &[WordEntry]) -> Result<()> {
    for entry in entries {
        writeln!(out, "{}\t{}", entry.count, entry.word)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, result: &RunResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}
