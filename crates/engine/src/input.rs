//! Opening the byte stream a run reads from.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{EngineError, Result};

/// Open `path` for buffered reading, or lock standard input when no path is given.
///
/// A file handle is closed when the returned reader is dropped. Standard input is only locked,
/// never closed.
///
/// # Errors
///
/// Returns [`EngineError::InputOpen`] when the file cannot be opened.
pub fn open(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| EngineError::InputOpen {
                path: path.to_path_buf(),
                source: e,
            })?;
            debug!("reading from {}", path.display());
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            debug!("reading from standard input");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}
