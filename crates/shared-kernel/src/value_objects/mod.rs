// crates/shared-kernel/src/value_objects/mod.rs
pub mod occurrences;
pub mod word;

pub use occurrences::Occurrences;
pub use word::{MAX_WORD_LEN, Word};
