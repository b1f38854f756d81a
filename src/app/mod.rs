//! Application layer with dependency injection container.
//!
//! The container owns infrastructure dependencies (the book repository) and
//! hands them to the game session and CLI commands, following hexagonal
//! architecture: adapters are chosen here, never inside the domain logic.

pub mod config;
pub mod container;

pub use config::SessionConfig;
pub use container::{App, AppBuilder};
