//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Find the completed line on the board, if any.
    ///
    /// Returns the winning player together with the indices of the line.
    /// A legally reached board has at most one winner, so the first match
    /// is returned.
    pub fn winning_line(cells: &[Cell; 9]) -> Option<(Player, [usize; 3])> {
        for &line in &WINNING_LINES {
            let [a, b, c] = line;
            if cells[a] != Cell::Empty && cells[a] == cells[b] && cells[b] == cells[c] {
                let player = match cells[a] {
                    Cell::X => Player::X,
                    Cell::O => Player::O,
                    Cell::Empty => unreachable!("empty cells are filtered above"),
                };
                return Some((player, line));
            }
        }
        None
    }
}
