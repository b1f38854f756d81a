//! Repository port for move book persistence.
//!
//! This module defines the trait boundary between the domain and
//! infrastructure layers for book storage and retrieval.

use std::path::Path;

use crate::{Result, book::MoveBook};

/// Port for persisting and loading move books.
///
/// This trait abstracts the storage mechanism, allowing different
/// implementations (JSON file, in-memory, database, etc.) without coupling
/// the domain logic to a specific serialization format.
pub trait BookRepository {
    /// Save a book to persistent storage.
    ///
    /// Implementations must never leave a half-written file behind: either
    /// the previous contents or the new contents are on disk at every point.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path cannot be created or written to
    /// - Serialization fails
    /// - I/O errors occur during writing
    fn save(&self, book: &MoveBook, path: &Path) -> Result<()>;

    /// Load a book from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file format is invalid or corrupted
    /// - Deserialization fails
    fn load(&self, path: &Path) -> Result<MoveBook>;

    /// Load a book, falling back to an empty one on any error.
    ///
    /// A missing or unparsable file is treated as an empty knowledge base;
    /// this never fails. Callers that want to warn the user should call
    /// [`load`](Self::load) directly and inspect the error.
    fn load_or_default(&self, path: &Path) -> MoveBook {
        self.load(path).unwrap_or_default()
    }
}
