//! Move resolution over the book and the tutor.
//!
//! The resolver is the apprentice's decision procedure: recall the stored
//! move for the current position if it is still playable, otherwise ask the
//! tutor and record the answer for next time.

use crate::{
    Result, book::MoveBook, ports::Tutor, tictactoe::BoardState, types::Position,
};

/// How a move was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    /// The book already knew this position.
    Recalled(Position),
    /// The tutor was consulted and the answer was recorded.
    Learned {
        position: Position,
        /// The stale recommendation that was overwritten, if any.
        replaced: Option<Position>,
    },
}

impl Advice {
    /// The resolved move.
    pub fn position(&self) -> Position {
        match self {
            Advice::Recalled(position) => *position,
            Advice::Learned { position, .. } => *position,
        }
    }

    /// Whether the book was mutated and should be persisted.
    pub fn was_learned(&self) -> bool {
        matches!(self, Advice::Learned { .. })
    }
}

/// Resolver for the apprentice's moves.
pub struct Advisor;

impl Advisor {
    /// Resolve a move for the board, learning from the tutor when needed.
    ///
    /// - A usable book entry is returned as [`Advice::Recalled`] and the book
    ///   is left untouched.
    /// - An unknown position is referred to the tutor; the answer is stored
    ///   and returned as [`Advice::Learned`].
    /// - A stale entry (its cell is now occupied) is discarded: the tutor is
    ///   asked and the entry overwritten.
    ///
    /// The returned position always points at an empty cell.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::NoMovesAvailable`] if the board is terminal.
    /// - [`crate::Error::InvalidMove`] if the tutor recommends an occupied
    ///   cell.
    /// - Any error the tutor itself reports.
    pub fn resolve<T: Tutor + ?Sized>(
        book: &mut MoveBook,
        board: &BoardState,
        tutor: &mut T,
    ) -> Result<Advice> {
        let replaced = match book.recall(board) {
            Ok(Some(position)) => return Ok(Advice::Recalled(position)),
            Ok(None) => None,
            Err(crate::Error::StaleKnowledge { position, .. }) => Some(Position::new(position)?),
            Err(err) => return Err(err),
        };

        let position = tutor.recommend(board)?;
        if !board.is_empty(position.value()) {
            return Err(crate::Error::InvalidMove {
                position: position.value(),
            });
        }

        book.learn(board.key(), position);
        Ok(Advice::Learned { position, replaced })
    }
}
