//! Tests for move book persistence through the JSON repository

use std::path::Path;

use apprentice::{
    MoveBook, Position,
    adapters::JsonRepository,
    ports::BookRepository,
    tictactoe::BoardState,
};
use tempfile::TempDir;

fn learned_book() -> MoveBook {
    let mut book = MoveBook::new();

    let after_center = BoardState::new().make_move(4).unwrap();
    book.learn(after_center.key(), Position::new(0).unwrap());

    let after_corner = BoardState::new().make_move(0).unwrap();
    book.learn(after_corner.key(), Position::new(4).unwrap());

    book
}

#[test]
fn test_book_save_load_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("book.json");

    let book = learned_book();
    let repo = JsonRepository::new();

    repo.save(&book, &file_path).expect("Failed to save book");
    assert!(file_path.exists(), "Saved file should exist");

    let loaded = repo.load(&file_path).expect("Failed to load book");
    assert_eq!(loaded, book, "Loaded book should match the saved one");
}

#[test]
fn test_saved_file_has_sorted_string_keys() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("book.json");

    JsonRepository::new()
        .save(&learned_book(), &file_path)
        .expect("Failed to save book");

    let raw = std::fs::read_to_string(&file_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let object = value.as_object().expect("book file should be a JSON object");

    let keys: Vec<&String> = object.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted, "keys should come out sorted");

    for cell in object.values() {
        let cell = cell.as_u64().expect("cells should be integers");
        assert!(cell < 9, "cells should be 0-8");
    }
}

#[test]
fn test_missing_file_loads_as_empty_book() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("never_written.json");

    let repo = JsonRepository::new();
    assert!(repo.load(&file_path).is_err());
    assert!(repo.load_or_default(&file_path).is_empty());
}

#[test]
fn test_corrupt_file_loads_as_empty_book() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("book.json");
    std::fs::write(&file_path, "this is not a book").unwrap();

    let repo = JsonRepository::new();
    assert!(repo.load(&file_path).is_err());
    assert!(repo.load_or_default(&file_path).is_empty());
}

#[test]
fn test_invalid_keys_are_rejected_on_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("book.json");
    // A key whose turn marker contradicts its piece counts
    std::fs::write(&file_path, r#"{"X........_X": 0}"#).unwrap();

    let repo = JsonRepository::new();
    assert!(repo.load(&file_path).is_err());
    assert!(repo.load_or_default(&file_path).is_empty());
}

#[test]
fn test_resave_after_learning_preserves_previous_entries() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("book.json");
    let repo = JsonRepository::new();

    let mut book = learned_book();
    repo.save(&book, &file_path).unwrap();

    let after_edge = BoardState::new().make_move(1).unwrap();
    book.learn(after_edge.key(), Position::new(4).unwrap());
    repo.save(&book, &file_path).unwrap();

    let loaded = repo.load(&file_path).unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded, book);
}

#[test]
fn test_save_into_missing_directory_fails_cleanly() {
    let repo = JsonRepository::new();
    let result = repo.save(
        &learned_book(),
        Path::new("/nonexistent_dir_apprentice_12345/book.json"),
    );
    assert!(result.is_err());
}
