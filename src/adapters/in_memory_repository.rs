//! In-memory book repository for testing.
//!
//! This adapter provides a pure in-memory implementation of BookRepository,
//! enabling fast tests without any file system I/O.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{Result, book::MoveBook, error::Error, ports::BookRepository};

/// In-memory repository for testing.
///
/// Stores serialized books in a shared map keyed by path, avoiding file
/// system I/O entirely. Clones share the same underlying storage, so a test
/// can hand one clone to the code under test and inspect the other.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of books currently stored.
    ///
    /// Useful for testing to verify save operations occurred.
    pub fn count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    /// Clear all stored books.
    pub fn clear(&self) {
        self.storage.lock().unwrap().clear();
    }

    /// Check if a book exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().contains_key(&key)
    }
}

impl BookRepository for InMemoryRepository {
    fn save(&self, book: &MoveBook, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();
        let bytes = serde_json::to_vec(book)?;
        self.storage.lock().unwrap().insert(key, bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<MoveBook> {
        let key = path.to_string_lossy().to_string();
        let storage = self.storage.lock().unwrap();

        let bytes = storage.get(&key).ok_or_else(|| Error::Io {
            operation: format!("load book from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        let book = serde_json::from_slice(bytes)?;
        Ok(book)
    }
}
