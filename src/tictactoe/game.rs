//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Player};
use crate::types::Position;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// Classification of a board position.
///
/// This is the win/draw check applied after every move: a completed line
/// wins for its owner, a full board without one is drawn, anything else is
/// still in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Won(Player),
    Drawn,
}

impl GameStatus {
    /// Evaluate a board position.
    ///
    /// Checks all 8 winning lines for three identical non-empty marks, then
    /// falls back to draw detection on a full board. Deterministic and free
    /// of side effects.
    pub fn evaluate(board: &BoardState) -> GameStatus {
        if let Some(winner) = board.winner() {
            GameStatus::Won(winner)
        } else if board.empty_positions().is_empty() {
            GameStatus::Drawn
        } else {
            GameStatus::Ongoing
        }
    }

    /// Convert into a final outcome, if the game is over.
    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            GameStatus::Won(player) => Some(GameOutcome::Win(player)),
            GameStatus::Drawn => Some(GameOutcome::Draw),
            GameStatus::Ongoing => None,
        }
    }
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    initial: BoardState,
    current: BoardState,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the standard initial position
    pub fn new() -> Self {
        let initial = BoardState::new();
        Game {
            initial,
            current: initial,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game is already decided, or
    /// the underlying move error if the cell is occupied.
    pub fn play(&mut self, position: Position) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.current.to_move;
        self.current = self.current.make_move(position.value())?;
        self.moves.push(Move { position, player });
        self.outcome = GameStatus::evaluate(&self.current).outcome();
        Ok(())
    }

    /// Get the current board state
    pub fn current_state(&self) -> &BoardState {
        &self.current
    }

    /// Get the initial board state
    pub fn initial_state(&self) -> &BoardState {
        &self.initial
    }

    /// Get the moves played so far
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Get the outcome, if the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    fn pos(value: usize) -> Position {
        Position::new(value).unwrap()
    }

    #[test]
    fn test_status_of_empty_board_is_ongoing() {
        assert_eq!(GameStatus::evaluate(&BoardState::new()), GameStatus::Ongoing);
    }

    #[test]
    fn test_diagonal_win_detected() {
        // X O X
        // O X O
        // . . X
        let board = BoardState::from_key_str("XOXOXO..X_O").unwrap();
        assert_eq!(GameStatus::evaluate(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_drawn() {
        // X O X
        // X O O
        // O X X
        let board = BoardState::from_key_str("XOXXOOOXX_O").unwrap();
        assert_eq!(GameStatus::evaluate(&board), GameStatus::Drawn);
    }

    #[test]
    fn test_game_records_moves_and_outcome() {
        let mut game = Game::new();
        // X takes the top row while O plays the middle row
        for position in [0, 3, 1, 4, 2] {
            game.play(pos(position)).unwrap();
        }

        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
        assert_eq!(game.moves().len(), 5);
        assert_eq!(game.current_state().get(0), Cell::X);
        assert_eq!(game.current_state().get(3), Cell::O);
        assert_eq!(game.initial_state(), &BoardState::new());
    }

    #[test]
    fn test_play_after_game_over_is_rejected() {
        let mut game = Game::new();
        for position in [0, 3, 1, 4, 2] {
            game.play(pos(position)).unwrap();
        }

        assert!(matches!(game.play(pos(8)), Err(crate::Error::GameOver)));
    }
}
