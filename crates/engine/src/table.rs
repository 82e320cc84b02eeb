//! Insert-or-increment frequency table.

use hashbrown::HashMap;
use hashbrown::hash_map::IntoIter;
use serde::Serialize;
use words_shared_kernel::{Occurrences, Word};

use crate::error::Result;

/// One distinct word and how many times it appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub word: Word,
    pub count: Occurrences,
}

impl WordEntry {
    pub fn new(word: Word, count: Occurrences) -> Self {
        Self { word, count }
    }
}

/// Distinct words mapped to their occurrence counts.
///
/// Iteration order is unspecified. Each word tokenized so far has exactly one entry, and its
/// count equals the number of times it was inserted.
#[derive(Debug, Clone, Default)]
pub struct WordTable {
    entries: HashMap<Word, Occurrences>,
}

impl WordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain a word stream into a new table, stopping at the first read error.
    ///
    /// # Errors
    ///
    /// Propagates the first error yielded by `words`; the partially built table is dropped.
    pub fn try_from_words<I>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Word>>,
    {
        let mut table = Self::new();
        for word in words {
            table.insert_or_increment(word?);
        }
        Ok(table)
    }

    /// Count one more occurrence of `word`, adding it with a count of 1 if unseen.
    pub fn insert_or_increment(&mut self, word: Word) {
        self.entries.entry(word).or_insert(Occurrences::ZERO).increment();
    }

    /// Number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, word: &str) -> Option<Occurrences> {
        self.entries.get(word).copied()
    }

    /// Sum of all counts, i.e. the number of words inserted.
    pub fn total(&self) -> Occurrences {
        self.entries.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Word, Occurrences)> + '_ {
        self.entries.iter().map(|(word, count)| (word, *count))
    }
}

impl Extend<Word> for WordTable {
    fn extend<T: IntoIterator<Item = Word>>(&mut self, iter: T) {
        for word in iter {
            self.insert_or_increment(word);
        }
    }
}

impl FromIterator<Word> for WordTable {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

/// Moves entries out of a [`WordTable`], in unspecified order.
pub struct Entries(IntoIter<Word, Occurrences>);

impl Iterator for Entries {
    type Item = WordEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(word, count)| WordEntry::new(word, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Entries {}

impl IntoIterator for WordTable {
    type Item = WordEntry;
    type IntoIter = Entries;

    fn into_iter(self) -> Self::IntoIter {
        Entries(self.entries.into_iter())
    }
}
