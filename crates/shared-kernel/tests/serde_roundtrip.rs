// crates/shared-kernel/tests/serde_roundtrip.rs
use serde::{Deserialize, Serialize};
use words_shared_kernel::{MAX_WORD_LEN, Occurrences, Word};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Row {
    word: Word,
    count: Occurrences,
}

#[test]
fn serializes_transparently() {
    let row = Row { word: Word::parse("hello").expect("valid word"), count: Occurrences::from(2) };
    let json = serde_json::to_string(&row).expect("serializes");
    assert_eq!(json, r#"{"word":"hello","count":2}"#);

    let decoded: Row = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, row);
}

#[test]
fn rejects_non_canonical_words() {
    assert!(serde_json::from_str::<Word>(r#""HELLO""#).is_err());
    assert!(serde_json::from_str::<Word>(r#""A1 A1 A1""#).is_err());
    assert!(serde_json::from_str::<Word>(r#""""#).is_err());

    let too_long = format!("\"{}\"", "a".repeat(MAX_WORD_LEN + 1));
    assert!(serde_json::from_str::<Word>(&too_long).is_err());

    let longest = format!("\"{}\"", "a".repeat(MAX_WORD_LEN));
    let word: Word = serde_json::from_str(&longest).expect("deserializes");
    assert_eq!(word.len(), MAX_WORD_LEN);
}
