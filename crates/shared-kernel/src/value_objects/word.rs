// crates/shared-kernel/src/value_objects/word.rs
use std::borrow::Borrow;
use std::fmt;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Longest word kept by the tokenizer. Longer runs are cut to this many characters.
pub const MAX_WORD_LEN: usize = 63;

/// A lowercase run of ASCII letters, at most [`MAX_WORD_LEN`] characters long.
///
/// Words up to 24 bytes are stored inline.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Word(CompactString);

impl Word {
    /// Build a word from raw bytes.
    ///
    /// Returns `None` for an empty run or when any byte is not an ASCII letter. Upper case is
    /// folded and anything past [`MAX_WORD_LEN`] is dropped.
    pub fn from_ascii(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        let text: CompactString = bytes
            .iter()
            .take(MAX_WORD_LEN)
            .map(|b| char::from(b.to_ascii_lowercase()))
            .collect();
        Some(Self(text))
    }

    /// Same as [`Word::from_ascii`] for string input.
    pub fn parse(text: &str) -> Option<Self> {
        Self::from_ascii(text.as_bytes())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Words built by [`Word::from_ascii`] are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Accepts only text that is already a word: lowercase ASCII letters, 1 to
/// [`MAX_WORD_LEN`] long. Nothing is folded or truncated.
impl TryFrom<String> for Word {
    type Error = String;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        match Self::parse(&text) {
            Some(word) if word.as_str() == text => Ok(word),
            _ => Err(format!(
                "invalid word {text:?}: expected 1 to {MAX_WORD_LEN} lowercase ASCII letters"
            )),
        }
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case() {
        let word = Word::parse("HeLLo").unwrap();
        assert_eq!(word, "hello");
    }

    #[test]
    fn rejects_empty_and_non_letters() {
        assert!(Word::parse("").is_none());
        assert!(Word::parse("abc1").is_none());
        assert!(Word::parse("don't").is_none());
        assert!(Word::parse("café").is_none());
    }

    #[test]
    fn truncates_long_runs() {
        let long = "a".repeat(MAX_WORD_LEN + 10);
        let word = Word::parse(&long).unwrap();
        assert_eq!(word.len(), MAX_WORD_LEN);
        assert_eq!(word, Word::parse(&"a".repeat(MAX_WORD_LEN)).unwrap());
    }

    #[test]
    fn try_from_requires_canonical_text() {
        assert_eq!(Word::try_from("hello".to_owned()).unwrap(), "hello");
        assert!(Word::try_from("Hello".to_owned()).is_err());
        assert!(Word::try_from(String::new()).is_err());
        assert!(Word::try_from("a".repeat(MAX_WORD_LEN + 1)).is_err());
        assert!(Word::try_from("a".repeat(MAX_WORD_LEN)).is_ok());
    }
}
