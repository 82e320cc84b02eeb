// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

use std::io::{self, Write};

use log::info;

use crate::config::Config;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run one invocation end to end: read the input, count, print to stdout.
///
/// Output is written only after the whole input has been read, so a read error leaves stdout
/// untouched.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, or stdout cannot be written.
pub fn execute(config: &Config) -> Result<()> {
    info!("mode: {:?}, input: {:?}", config.mode, config.input);
    let result = words_engine::run(config)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    presentation::write_result(&mut out, &result, config.format)?;
    out.flush()?;
    Ok(())
}
