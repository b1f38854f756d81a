//! Console Tic-Tac-Toe against an apprentice opponent
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe game implementation with validation
//! - A move book mapping board positions to tutor-recommended moves
//! - A resolver that recalls stored moves and learns unknown positions
//!   from a human tutor
//! - JSON persistence of the book with atomic writes
//! - CLI for playing, inspecting, and exporting the book

pub mod adapters;
pub mod advisor;
pub mod app;
pub mod book;
pub mod cli;
pub mod error;
pub mod export;
pub mod ports;
pub mod tictactoe;
pub mod types;

pub use advisor::{Advice, Advisor};
pub use book::MoveBook;
pub use error::{Error, Result};
pub use types::{Position, PositionKey};
