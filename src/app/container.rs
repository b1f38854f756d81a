//! Dependency injection container for the apprentice application.
//!
//! Centralizes creation and wiring of dependencies. All infrastructure
//! dependencies are owned by the app and injected into domain objects and
//! use cases.

use std::{path::Path, sync::Arc};

use crate::{
    Result, adapters::JsonRepository, book::MoveBook, ports::BookRepository,
};

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```no_run
/// use apprentice::app::App;
/// use std::path::Path;
///
/// let app = App::new();
/// let book = app.load_book_or_default(Path::new("apprentice_book.json"));
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use apprentice::app::App;
/// use apprentice::adapters::InMemoryRepository;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .build();
/// ```
pub struct App {
    /// Repository for book persistence
    repository: Arc<dyn BookRepository + Send + Sync>,
}

impl App {
    /// Create a new app with production defaults: a [`JsonRepository`] for
    /// book persistence.
    pub fn new() -> Self {
        Self {
            repository: Arc::new(JsonRepository::new()),
        }
    }

    /// Create a builder for constructing an app with custom dependencies.
    ///
    /// Primarily used for testing with the in-memory repository.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Get the book repository.
    pub fn repository(&self) -> Arc<dyn BookRepository + Send + Sync> {
        Arc::clone(&self.repository)
    }

    /// Load the book at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or corrupt.
    pub fn load_book(&self, path: &Path) -> Result<MoveBook> {
        self.repository.load(path)
    }

    /// Load the book at `path`, starting empty if it is missing or corrupt.
    pub fn load_book_or_default(&self, path: &Path) -> MoveBook {
        self.repository.load_or_default(path)
    }

    /// Persist the book to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the in-memory book is unaffected.
    pub fn save_book(&self, book: &MoveBook, path: &Path) -> Result<()> {
        self.repository.save(book, path)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for apps with custom dependencies.
pub struct AppBuilder {
    repository: Option<Arc<dyn BookRepository + Send + Sync>>,
}

impl AppBuilder {
    /// Create a new builder with no dependencies configured.
    pub fn new() -> Self {
        Self { repository: None }
    }

    /// Use the given repository for book persistence.
    pub fn with_repository<R>(mut self, repository: R) -> Self
    where
        R: BookRepository + Send + Sync + 'static,
    {
        self.repository = Some(Arc::new(repository));
        self
    }

    /// Build the app, filling unset dependencies with production defaults.
    pub fn build(self) -> App {
        App {
            repository: self
                .repository
                .unwrap_or_else(|| Arc::new(JsonRepository::new())),
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
