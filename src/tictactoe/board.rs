//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{BOARD_SIZE, PositionKey};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => f.write_str("X"),
            Player::O => f.write_str("O"),
        }
    }
}

/// Complete board state including cells and whose turn it is
///
/// This type implements `Copy` for efficiency since it's only 10 bytes
/// (9 bytes for cells + 1 byte for player enum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl BoardState {
    /// Create a new empty board with X to move.
    ///
    /// The human tutor always plays X and opens the game; the apprentice
    /// answers as O.
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Helper: Parse 9 cells from a slice of characters.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 characters or any character is invalid.
    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() < BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(BOARD_SIZE).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    /// Helper: Count pieces on the board.
    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Helper: Parse a player string ("X" or "O").
    fn parse_player(player_str: &str, context: &str) -> Result<Player, crate::Error> {
        match player_str {
            "X" => Ok(Player::X),
            "O" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayerString {
                player: player_str.to_string(),
                key: context.to_string(),
            }),
        }
    }

    /// Create a board from key format "XXXXXXXXX_P" where P is X or O.
    ///
    /// The board part uses `.` for empty cells. The state must be reachable
    /// in an X-first game: piece counts equal (X to move) or X ahead by one
    /// (O to move), and at most one player with a completed line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The key format is invalid (not "board_player")
    /// - The board part is not exactly 9 valid cell characters
    /// - The piece counts or turn marker are inconsistent with X-first play
    /// - Both players have winning lines
    pub fn from_key_str(key: &str) -> Result<Self, crate::Error> {
        let mut parts = key.split('_');
        let board = parts.next().ok_or_else(|| crate::Error::MissingKeyPart {
            part: "board".to_string(),
            key: key.to_string(),
        })?;
        let to_move_str = parts.next().ok_or_else(|| crate::Error::MissingKeyPart {
            part: "player".to_string(),
            key: key.to_string(),
        })?;

        if parts.next().is_some() || board.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidKeyFormat {
                key: key.to_string(),
                expected: "XXXXXXXXX_P".to_string(),
            });
        }

        let chars: Vec<char> = board.chars().collect();
        let cells = Self::parse_cells(&chars, key)?;
        let to_move = Self::parse_player(to_move_str, key)?;
        let count = Self::count_pieces(&cells);

        // X always opens, so X is either even with O (X to move) or one ahead
        // (O to move).
        let consistent = match to_move {
            Player::X => count.x == count.o,
            Player::O => count.x == count.o + 1,
        };
        if !consistent {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let board = BoardState { cells, to_move };
        if board.has_won(Player::X) && board.has_won(Player::O) {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("both players cannot have winning lines in '{key}'"),
            });
        }

        Ok(board)
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        pos < BOARD_SIZE && self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Make a move and return a new board state
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState, crate::Error> {
        if pos >= BOARD_SIZE {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut new_state = *self;
        new_state.cells[pos] = self.to_move.to_cell();
        new_state.to_move = self.to_move.opponent();
        Ok(new_state)
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.has_won(Player::X) || self.has_won(Player::O) || self.empty_positions().is_empty()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        super::lines::LineAnalyzer::winning_line(&self.cells).map(|(player, _)| player)
    }

    /// Get the canonical string representation for use as a key
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move
        )
    }

    /// Get the validated position key for this board.
    pub fn key(&self) -> PositionKey {
        PositionKey::from_encoding(self.encode())
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty_x_to_move() {
        let board = BoardState::new();
        assert_eq!(board.to_move, Player::X);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_make_move_alternates_turns() {
        let board = BoardState::new();
        let board = board.make_move(4).unwrap();
        assert_eq!(board.get(4), Cell::X);
        assert_eq!(board.to_move, Player::O);

        let board = board.make_move(0).unwrap();
        assert_eq!(board.get(0), Cell::O);
        assert_eq!(board.to_move, Player::X);
    }

    #[test]
    fn test_make_move_rejects_occupied_and_out_of_range() {
        let board = BoardState::new().make_move(4).unwrap();
        assert!(matches!(
            board.make_move(4),
            Err(crate::Error::InvalidMove { position: 4 })
        ));
        assert!(matches!(
            board.make_move(9),
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn test_encode_round_trips_through_from_key_str() {
        let board = BoardState::new()
            .make_move(4)
            .unwrap()
            .make_move(0)
            .unwrap()
            .make_move(8)
            .unwrap();
        let encoded = board.encode();
        assert_eq!(encoded, "O...X...X_O");

        let parsed = BoardState::from_key_str(&encoded).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_distinct_boards_have_distinct_keys() {
        let a = BoardState::new().make_move(0).unwrap();
        let b = BoardState::new().make_move(1).unwrap();
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_from_key_str_rejects_turn_mismatch() {
        // One X on the board means it must be O's turn
        assert!(BoardState::from_key_str("X........_X").is_err());
        assert!(BoardState::from_key_str("X........_O").is_ok());
    }

    #[test]
    fn test_from_key_str_rejects_double_win() {
        // X wins on the top row and O on the bottom row at once
        assert!(BoardState::from_key_str("XXX...OOO_X").is_err());
    }

    #[test]
    fn test_legal_moves_empty_when_won() {
        let board = BoardState::from_key_str("XXX.OO..._O").unwrap();
        assert!(board.is_terminal());
        assert!(board.legal_moves().is_empty());
    }
}
