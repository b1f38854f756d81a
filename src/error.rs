//! Error types for the apprentice crate

use thiserror::Error;

/// Main error type for the apprentice crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("no moves available: the position is terminal")]
    NoMovesAvailable,

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("stale recommendation for '{key}': cell {position} is already occupied")]
    StaleKnowledge { key: String, position: usize },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid key format '{key}' (expected format: '{expected}')")]
    InvalidKeyFormat { key: String, expected: String },

    #[error("missing {part} in key '{key}'")]
    MissingKeyPart { part: String, key: String },

    #[error("invalid player '{player}' in key '{key}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, key: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("tutor could not supply a move: {reason}")]
    TutorUnavailable { reason: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
