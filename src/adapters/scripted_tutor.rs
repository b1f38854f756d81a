//! Scripted tutor for testing.
//!
//! Replays a fixed sequence of recommendations instead of blocking on the
//! console, so resolver behavior can be tested deterministically.

use std::collections::VecDeque;

use crate::{Result, error::Error, ports::Tutor, tictactoe::BoardState, types::Position};

/// Tutor that answers from a queued script.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTutor {
    answers: VecDeque<Position>,
    consulted: usize,
}

impl ScriptedTutor {
    /// Create a tutor that will answer with the given positions, in order.
    pub fn new(answers: impl IntoIterator<Item = Position>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            consulted: 0,
        }
    }

    /// How many times the tutor has been consulted.
    pub fn consulted(&self) -> usize {
        self.consulted
    }
}

impl Tutor for ScriptedTutor {
    fn recommend(&mut self, _board: &BoardState) -> Result<Position> {
        self.consulted += 1;
        self.answers.pop_front().ok_or_else(|| Error::TutorUnavailable {
            reason: "scripted tutor has no answers left".to_string(),
        })
    }
}
