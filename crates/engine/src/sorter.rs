//! Ordered insertion sort over word entries.

use log::debug;

use crate::table::WordEntry;

/// Sort `entries` by repeated ordered insertion.
///
/// `precedes(a, b)` must return `true` only when `a` strictly comes before `b`. Each entry is
/// inserted in front of the first element it precedes, so entries that compare equal keep the
/// order in which they were taken from `entries`. For a [`crate::table::WordTable`] that order is
/// itself unspecified.
///
/// Runs in O(n²) comparisons.
pub fn sort<I, F>(entries: I, precedes: F) -> Vec<WordEntry>
where
    I: IntoIterator<Item = WordEntry>,
    F: Fn(&WordEntry, &WordEntry) -> bool,
{
    let entries = entries.into_iter();
    let mut sorted: Vec<WordEntry> = Vec::with_capacity(entries.size_hint().0);

    for entry in entries {
        insert_ordered(&mut sorted, entry, &precedes);
    }

    debug!("sorted {} entries", sorted.len());
    sorted
}

/// Insert `entry` before the first element of `sorted` that it strictly precedes.
pub fn insert_ordered<F>(sorted: &mut Vec<WordEntry>, entry: WordEntry, precedes: F)
where
    F: Fn(&WordEntry, &WordEntry) -> bool,
{
    let at = sorted
        .iter()
        .position(|existing| precedes(&entry, existing))
        .unwrap_or(sorted.len());
    sorted.insert(at, entry);
}
