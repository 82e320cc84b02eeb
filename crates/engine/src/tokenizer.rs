//! Single-pass byte classifier that splits input into lowercase ASCII words.
//!
//! A word is a maximal run of ASCII letters. Every other byte (whitespace, punctuation, digits,
//! non-ASCII) ends the current run.

use std::io::{BufRead, ErrorKind};

use log::{debug, trace};
use words_shared_kernel::{MAX_WORD_LEN, Word};

use crate::error::{EngineError, Result};

/// Count words without materializing them.
///
/// Each transition from "outside a word" to "inside a word" counts once, so memory use is
/// constant regardless of input size.
///
/// # Errors
///
/// Returns [`EngineError::Read`] if the underlying reader fails.
pub fn count_total<R: BufRead>(reader: &mut R) -> Result<usize> {
    let mut total = 0;
    let mut scanned = 0usize;
    let mut in_word = false;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(EngineError::Read(e)),
        };
        if buf.is_empty() {
            break;
        }

        for &b in buf {
            if b.is_ascii_alphabetic() {
                if !in_word {
                    total += 1;
                    in_word = true;
                }
            } else {
                in_word = false;
            }
        }

        let len = buf.len();
        scanned += len;
        reader.consume(len);
    }

    debug!("scanned {scanned} bytes, {total} words");
    Ok(total)
}

/// Lazily split `reader` into words.
///
/// Runs longer than [`MAX_WORD_LEN`] are truncated but still count as a single word.
pub fn tokenize<R: BufRead>(reader: R) -> Words<R> {
    Words {
        reader,
        run: Vec::with_capacity(MAX_WORD_LEN),
        done: false,
    }
}

/// Iterator returned by [`tokenize`].
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug)]
pub struct Words<R> {
    reader: R,
    run: Vec<u8>,
    done: bool,
}

impl<R> Words<R> {
    fn take_word(run: &mut Vec<u8>) -> Option<Word> {
        let word = Word::from_ascii(run);
        run.clear();
        word
    }
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = Result<Word>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let chunk = match self.reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    self.run.clear();
                    return Some(Err(EngineError::Read(e)));
                }
            };

            if chunk.is_empty() {
                self.done = true;
                return Self::take_word(&mut self.run).map(Ok);
            }

            let mut used = 0;
            let mut finished = None;
            for &b in chunk {
                used += 1;
                if b.is_ascii_alphabetic() {
                    if self.run.len() < MAX_WORD_LEN {
                        self.run.push(b.to_ascii_lowercase());
                    }
                } else if !self.run.is_empty() {
                    finished = Self::take_word(&mut self.run);
                    break;
                }
            }
            self.reader.consume(used);

            if let Some(word) = finished {
                trace!("word: {word}");
                return Some(Ok(word));
            }
        }
    }
}
