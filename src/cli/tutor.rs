//! Console tutor
//!
//! The human at the keyboard acts as the apprentice's tutor: when the book
//! has no usable move for the current position, this adapter explains the
//! situation and asks which cell the apprentice should take.

use crate::{
    Result, cli::input, ports::Tutor, tictactoe::BoardState, types::Position,
};

/// Tutor backed by the interactive console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleTutor;

impl ConsoleTutor {
    /// Create a new console tutor.
    pub fn new() -> Self {
        Self
    }
}

impl Tutor for ConsoleTutor {
    fn recommend(&mut self, board: &BoardState) -> Result<Position> {
        println!("I don't know this position yet. Teach me the right move.");
        input::prompt_position("Cell for the apprentice (1-9): ", board)
    }
}
