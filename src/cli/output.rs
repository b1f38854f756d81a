//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{BoardState, Cell};

/// Render the board for the console.
///
/// Occupied cells show their mark; empty cells show the 1-9 digit the player
/// types to claim them.
pub fn render_board(board: &BoardState) -> String {
    let cell_text = |idx: usize| match board.get(idx) {
        Cell::Empty => char::from_digit(idx as u32 + 1, 10)
            .expect("board indices are single digits")
            .to_string(),
        Cell::X => "X".to_string(),
        Cell::O => "O".to_string(),
    };

    let row = |start: usize| {
        format!(
            " {} | {} | {} ",
            cell_text(start),
            cell_text(start + 1),
            cell_text(start + 2)
        )
    };

    format!("\n{}\n---+---+---\n{}\n---+---+---\n{}\n", row(0), row(3), row(6))
}

/// Create a progress bar for book lookups
pub fn create_lookup_progress(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} positions")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Create a spinner for analysis tasks
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:24} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board_shows_digits() {
        let rendered = render_board(&BoardState::new());
        for digit in 1..=9 {
            assert!(rendered.contains(char::from_digit(digit, 10).unwrap()));
        }
    }

    #[test]
    fn test_render_shows_marks_over_digits() {
        let board = BoardState::new().make_move(4).unwrap();
        let rendered = render_board(&board);
        assert!(rendered.contains('X'));
        assert!(!rendered.contains('5'));
    }
}
