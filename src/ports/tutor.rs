//! Tutor port - the source of moves the apprentice does not know.
//!
//! When the book has no usable entry for a position, the apprentice asks its
//! tutor. In the console game the tutor is the human at the keyboard; in
//! tests it is a scripted sequence of answers.

use crate::{Result, tictactoe::BoardState, types::Position};

/// Source of recommended moves for unknown positions.
///
/// Implementations may interact with the outside world (the console tutor
/// blocks on stdin) or be fully deterministic (scripted answers in tests).
/// The returned position is validated again by the resolver, so a misbehaving
/// implementation cannot place a mark on an occupied cell.
pub trait Tutor {
    /// Recommend a move for the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if no recommendation can be produced, for example
    /// when the input stream is closed or a scripted tutor runs out of
    /// answers.
    fn recommend(&mut self, board: &BoardState) -> Result<Position>;
}
