//! JSON file implementation of the book repository.
//!
//! This adapter persists the move book as a pretty-printed JSON object
//! mapping position keys to cell indices. Keys come out sorted because the
//! book is an ordered map. Saves are atomic: the new contents are written to
//! a temporary file next to the target and renamed into place, so a crash
//! mid-write never leaves a truncated book on disk.

use std::{fs::File, io::BufReader, path::Path};

use tempfile::NamedTempFile;

use crate::{Result, book::MoveBook, error::Error, ports::BookRepository};

/// JSON-file-based book repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository;

impl JsonRepository {
    /// Create a new JSON repository.
    pub fn new() -> Self {
        Self
    }
}

impl BookRepository for JsonRepository {
    fn save(&self, book: &MoveBook, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| Error::Io {
            operation: format!("create temporary file in {dir:?}"),
            source,
        })?;

        serde_json::to_writer_pretty(tmp.as_file_mut(), book)?;

        tmp.persist(path).map_err(|e| Error::Io {
            operation: format!("replace book file {path:?}"),
            source: e.error,
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<MoveBook> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let book = serde_json::from_reader(BufReader::new(file))?;
        Ok(book)
    }
}
