//! Newtype wrappers for improved type safety and domain modeling.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Deserializer, Serialize};

/// Board size constant for Tic-Tac-Toe.
pub const BOARD_SIZE: usize = 9;

/// A position on the game board (0-8 for Tic-Tac-Toe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position(usize);

impl Position {
    /// Create a new position, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if the position is >= 9.
    pub fn new(value: usize) -> Result<Self, crate::Error> {
        if value < BOARD_SIZE {
            Ok(Position(value))
        } else {
            Err(crate::Error::InvalidPosition { position: value })
        }
    }

    /// Create a position from the 1-9 digit used in the console protocol.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if the digit is not 1-9.
    pub fn from_display(digit: usize) -> Result<Self, crate::Error> {
        if (1..=BOARD_SIZE).contains(&digit) {
            Ok(Position(digit - 1))
        } else {
            Err(crate::Error::InvalidPosition { position: digit })
        }
    }

    /// Get the inner value.
    pub fn value(&self) -> usize {
        self.0
    }

    /// Get the 1-9 digit shown to the player for this position.
    pub fn display_value(&self) -> usize {
        self.0 + 1
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = usize::deserialize(deserializer)?;
        Position::new(value).map_err(serde::de::Error::custom)
    }
}

/// A validated board position key.
///
/// The key is the string produced by [`crate::tictactoe::BoardState::encode`]:
/// nine cell characters (`.`, `X`, `O`) followed by `_X` or `_O` for the
/// player to move. Identical boards always yield identical keys and distinct
/// reachable boards never collide, so the key can index learned moves.
///
/// # Examples
///
/// ```
/// use apprentice::types::PositionKey;
///
/// // Parse from string (validates the format)
/// let key = PositionKey::parse("....X...._O").unwrap();
/// assert_eq!(key.as_str(), "....X...._O");
///
/// // Malformed keys are rejected
/// assert!(PositionKey::parse("not a key").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PositionKey(String);

impl PositionKey {
    /// Parse and validate a position key from a string.
    ///
    /// This validates that the string represents a reachable board state
    /// encoding with a consistent turn marker.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid board state encoding.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        // Validate by attempting to parse as a board state
        crate::tictactoe::BoardState::from_key_str(s)?;
        Ok(PositionKey(s.to_string()))
    }

    /// Create from a known-good encoding (unchecked, for internal use).
    pub(crate) fn from_encoding(encoding: String) -> Self {
        PositionKey(encoding)
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PositionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PositionKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for PositionKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        PositionKey::parse(&value).map_err(serde::de::Error::custom)
    }
}
