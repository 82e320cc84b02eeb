use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn words() -> Command {
    Command::new(env!("CARGO_BIN_EXE_words"))
}

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn shows_help() {
    words()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--frequency"))
        .stdout(predicate::str::contains("--count"));
}

#[test]
fn help_ignores_other_flags() {
    words()
        .args(["-f", "-h", "does-not-exist.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn counts_stdin_by_default() {
    words()
        .write_stdin("hello, World! 123 hello")
        .assert()
        .success()
        .stdout("The total number of words is: 3\n");
}

#[test]
fn counts_file() {
    let file = input_file("one two\nthree-four five6six");
    words()
        .arg("--count")
        .arg(file.path())
        .assert()
        .success()
        .stdout("The total number of words is: 6\n");
}

#[test]
fn frequency_ascending_by_default() {
    words()
        .arg("-f")
        .write_stdin("hello, World! 123 hello")
        .assert()
        .success()
        .stdout("The frequencies of each word are: \n1\tworld\n2\thello\n");
}

#[test]
fn frequency_descending() {
    let file = input_file("b a b c b a");
    words()
        .args(["--frequency", "--order", "desc"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("The frequencies of each word are: \n3\tb\n2\ta\n1\tc\n");
}

#[test]
fn frequency_top_and_json() {
    let output = words()
        .args(["-f", "--order", "desc", "--top", "1", "--format", "json"])
        .write_stdin("Rust rust RUST go go zig")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "frequencies": [{ "word": "rust", "count": 3 }] })
    );
}

#[test]
fn empty_input() {
    words()
        .write_stdin("")
        .assert()
        .success()
        .stdout("The total number of words is: 0\n");

    words()
        .arg("-f")
        .write_stdin("")
        .assert()
        .success()
        .stdout("The frequencies of each word are: \n");
}

#[test]
fn missing_file_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    words()
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error opening file"));
}

#[test]
fn verbose_logs_to_stderr() {
    words()
        .args(["-f", "-vv"])
        .write_stdin("a b a")
        .assert()
        .success()
        .stderr(predicate::str::contains("[debug]"))
        .stdout(predicate::str::contains("2\ta"));
}

#[test]
fn rejects_unknown_flag() {
    words().arg("--bogus").assert().code(2);
}
