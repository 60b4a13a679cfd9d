#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = include_str!("input/sample.txt");
const EXPECTED: &str = include_str!("input/sample.expected");

fn tagquery() -> Command {
    Command::cargo_bin("tagquery").expect("binary should build")
}

#[test]
fn answers_queries_from_stdin() {
    tagquery()
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn answers_queries_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("batch.txt");
    fs::write(&input, SAMPLE).unwrap();

    tagquery().arg(&input).assert().success().stdout(EXPECTED);
}

#[test]
fn writes_answers_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("answers.txt");

    tagquery()
        .arg("--output")
        .arg(&output)
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), EXPECTED);
}

#[test]
fn malformed_input_fails_without_partial_output() {
    tagquery()
        .write_stdin("1 2\n<a x = \"1\"></a>\na~x\nbroken")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("unexpected end of input"));
}

#[test]
fn strict_end_tags_flag() {
    let input = "1 1\n<a x = \"1\"></b>\na~x\n";

    tagquery().write_stdin(input).assert().success().stdout("1\n");

    tagquery()
        .arg("--strict-end-tags")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("mismatched end tag"));
}

#[test]
fn missing_input_file_is_reported() {
    tagquery()
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input file"));
}
