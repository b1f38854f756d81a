//! Tic-Tac-Toe game implementation

pub mod board;
pub mod explore;
pub mod game;
pub mod lines;

pub use board::{BoardState, Cell, Player};
pub use explore::{opponent_decision_states, reachable_states};
pub use game::{Game, GameOutcome, GameStatus, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
