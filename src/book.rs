//! The move book: learned recommendations keyed by board position.
//!
//! This is the apprentice's entire knowledge. Each entry maps a
//! [`PositionKey`] to the cell the tutor recommended the last time the
//! position came up. The map is ordered so the persisted JSON file keeps
//! stable, sorted keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    tictactoe::BoardState,
    types::{Position, PositionKey},
};

/// Learned move recommendations, one per board position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveBook {
    moves: BTreeMap<PositionKey, Position>,
}

impl MoveBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of learned positions.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check whether the book has no entries.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Look up the stored recommendation for a key, if any.
    pub fn recommendation(&self, key: &PositionKey) -> Option<Position> {
        self.moves.get(key).copied()
    }

    /// Record a recommendation, replacing any previous entry.
    ///
    /// Returns the replaced recommendation when the key was already known.
    pub fn learn(&mut self, key: PositionKey, position: Position) -> Option<Position> {
        self.moves.insert(key, position)
    }

    /// Remove a recommendation.
    pub fn forget(&mut self, key: &PositionKey) -> Option<Position> {
        self.moves.remove(key)
    }

    /// Iterate over the learned entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&PositionKey, Position)> {
        self.moves.iter().map(|(key, &pos)| (key, pos))
    }

    /// Recall the stored move for a board, verifying it is still playable.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::NoMovesAvailable`] if the board is terminal; there
    ///   is nothing to recommend.
    /// - [`crate::Error::StaleKnowledge`] if an entry exists but its cell is
    ///   occupied on this board. The caller should fall back to the tutor and
    ///   overwrite the entry.
    pub fn recall(&self, board: &BoardState) -> Result<Option<Position>, crate::Error> {
        if board.legal_moves().is_empty() {
            return Err(crate::Error::NoMovesAvailable);
        }

        let key = board.key();
        match self.recommendation(&key) {
            Some(position) if board.is_empty(position.value()) => Ok(Some(position)),
            Some(position) => Err(crate::Error::StaleKnowledge {
                key: key.into_string(),
                position: position.value(),
            }),
            None => Ok(None),
        }
    }
}
