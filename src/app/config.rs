//! Configuration types for game sessions.

use std::path::{Path, PathBuf};

/// Default file the apprentice keeps its knowledge in, relative to the
/// working directory.
pub const DEFAULT_BOOK_FILE: &str = "apprentice_book.json";

/// Configuration for an interactive session.
///
/// # Examples
///
/// ```
/// use apprentice::app::SessionConfig;
///
/// let config = SessionConfig::new()
///     .with_book_path("my_book.json")
///     .with_max_rounds(3);
/// assert_eq!(config.max_rounds, Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Where the move book is loaded from and saved to.
    pub book_path: PathBuf,
    /// Cap on the number of rounds; `None` plays until the human declines.
    pub max_rounds: Option<usize>,
}

impl SessionConfig {
    /// Create a configuration with the default book path and no round cap.
    pub fn new() -> Self {
        Self {
            book_path: PathBuf::from(DEFAULT_BOOK_FILE),
            max_rounds: None,
        }
    }

    /// Set the book file path.
    pub fn with_book_path(mut self, path: impl AsRef<Path>) -> Self {
        self.book_path = path.as_ref().to_path_buf();
        self
    }

    /// Cap the number of rounds played.
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
