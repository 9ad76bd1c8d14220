//! On-disk score file format and failure handling.

use std::fs;

use tui_snake::io::{FileScoreStore, ScoreStore};

#[test]
fn missing_file_loads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileScoreStore::new(dir.path().join("highest_score.txt"));
    assert_eq!(store.load(), 0);
}

#[test]
fn empty_file_loads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highest_score.txt");
    fs::write(&path, "").unwrap();
    let mut store = FileScoreStore::new(&path);
    assert_eq!(store.load(), 0);
}

#[test]
fn garbage_file_loads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highest_score.txt");
    fs::write(&path, "not a number").unwrap();
    let mut store = FileScoreStore::new(&path);
    assert_eq!(store.load(), 0);
}

#[test]
fn plain_decimal_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highest_score.txt");
    fs::write(&path, "120").unwrap();
    let mut store = FileScoreStore::new(&path);
    assert_eq!(store.load(), 120);
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highest_score.txt");
    fs::write(&path, "42\n").unwrap();
    let mut store = FileScoreStore::new(&path);
    assert_eq!(store.load(), 42);
}

#[test]
fn save_writes_the_decimal_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highest_score.txt");
    let mut store = FileScoreStore::new(&path);

    store.save(57);
    assert_eq!(fs::read_to_string(&path).unwrap(), "57");

    // A later save overwrites, no appending.
    store.save(130);
    assert_eq!(fs::read_to_string(&path).unwrap(), "130");
    assert_eq!(store.load(), 130);
}

#[test]
fn unwritable_path_fails_quietly() {
    let mut store = FileScoreStore::new("/nonexistent/dir/highest_score.txt");
    store.save(99);
    assert_eq!(store.load(), 0);
}
