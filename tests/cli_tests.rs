use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn wc_stream() -> Command {
    Command::cargo_bin("wc-stream").unwrap()
}

// 23 bytes, 2 newline-terminated lines, 4 words, all ASCII
const SAMPLE: &str = "hello brave worlds\nbye\n";

fn sample_file(dir: &TempDir) -> String {
    let path = dir.path().join("sample.txt");
    fs::write(&path, SAMPLE).unwrap();
    path.display().to_string()
}

#[test]
fn version() {
    let assert = wc_stream().arg("-V").assert();
    assert.success().stdout(contains("wc-stream"));
}

#[test]
fn help() {
    let assert = wc_stream().arg("-h").assert();
    assert.success().stdout(contains("Usage"));
}

#[test]
fn file_byte_count() {
    let dir = TempDir::new().unwrap();
    let path = sample_file(&dir);

    let assert = wc_stream().arg("-c").arg(&path).assert();
    assert.success().stdout(format!("23 {path}\n"));
}

#[test]
fn file_line_count() {
    let dir = TempDir::new().unwrap();
    let path = sample_file(&dir);

    let assert = wc_stream().arg("-l").arg(&path).assert();
    assert.success().stdout(format!("2 {path}\n"));
}

#[test]
fn file_word_count() {
    let dir = TempDir::new().unwrap();
    let path = sample_file(&dir);

    let assert = wc_stream().arg("-w").arg(&path).assert();
    assert.success().stdout(format!("4 {path}\n"));
}

#[test]
fn file_char_count() {
    let dir = TempDir::new().unwrap();
    let path = sample_file(&dir);

    let assert = wc_stream().arg("-m").arg(&path).assert();
    assert.success().stdout(format!("23 {path}\n"));
}

#[test]
fn file_default_reports_lines_words_chars() {
    let dir = TempDir::new().unwrap();
    let path = sample_file(&dir);

    let assert = wc_stream().arg(&path).assert();
    assert.success().stdout(format!("2 4 23 {path}\n"));
}

#[test]
fn multibyte_file_chars_differ_from_bytes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("accents.txt");
    // 11 chars, 13 bytes
    fs::write(&path, "héllo wörld").unwrap();
    let path = path.display().to_string();

    wc_stream()
        .arg("-m")
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("11 {path}\n"));
    wc_stream()
        .arg("-c")
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("13 {path}\n"));
}

#[test]
fn stdin_default_uses_tab_prefixed_values() {
    let assert = wc_stream().write_stdin("one two three").assert();
    assert.success().stdout("\t0 \t3 \t13\n");
}

#[test]
fn stdin_byte_count_comes_from_the_stream() {
    let assert = wc_stream().arg("-c").write_stdin("one two three").assert();
    assert.success().stdout("\t13\n");
}

#[test]
fn stdin_word_count() {
    let assert = wc_stream().arg("-w").write_stdin("one two three").assert();
    assert.success().stdout("\t3\n");
}

#[test]
fn empty_stdin_reports_all_zeros() {
    let assert = wc_stream().write_stdin("").assert();
    assert.success().stdout("\t0 \t0 \t0\n");
}

#[test]
fn empty_file_reports_all_zeros() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();
    let path = path.display().to_string();

    let assert = wc_stream().arg(&path).assert();
    assert.success().stdout(format!("0 0 0 {path}\n"));
}

#[test]
fn missing_file_fails_with_message_and_no_output() {
    let assert = wc_stream().arg("no-such-file.txt").assert();
    assert
        .failure()
        .stderr(contains("failed to open 'no-such-file.txt'"))
        .stdout("");
}

#[test]
fn conflicting_flags_are_rejected() {
    let assert = wc_stream().arg("-l").arg("-w").write_stdin("hi").assert();
    assert.failure().stderr(contains("cannot be used with"));
}
