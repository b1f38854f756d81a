//! Console input helpers
//!
//! Reading a move from the console loops until the player names an empty
//! cell, reporting each invalid attempt. Only a closed input stream is an
//! error.

use std::io::{self, Write};

use crate::{Result, error::Error, tictactoe::BoardState, types::Position};

/// Prompt until the player enters the digit of an empty cell.
///
/// # Errors
///
/// Returns an error only when the input stream is closed or unreadable;
/// invalid entries re-prompt instead.
pub fn prompt_position(prompt: &str, board: &BoardState) -> Result<Position> {
    let stdin = io::stdin();

    loop {
        print!("{prompt}");
        io::stdout().flush().map_err(|source| Error::Io {
            operation: "flush the console prompt".to_string(),
            source,
        })?;

        let mut line = String::new();
        let read = stdin.read_line(&mut line).map_err(|source| Error::Io {
            operation: "read a move from the console".to_string(),
            source,
        })?;
        if read == 0 {
            return Err(Error::Io {
                operation: "read a move from the console".to_string(),
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "input stream closed"),
            });
        }

        let choice = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|digit| Position::from_display(digit).ok());

        match choice {
            Some(position) if board.is_empty(position.value()) => return Ok(position),
            _ => println!("Invalid move. Pick the digit of an empty cell (1-9)."),
        }
    }
}

/// Ask a yes/no question, defaulting to "no" on a closed stream.
///
/// # Errors
///
/// Returns an error if the console cannot be read for another reason.
pub fn prompt_yes_no(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();

    loop {
        print!("{prompt}");
        io::stdout().flush().map_err(|source| Error::Io {
            operation: "flush the console prompt".to_string(),
            source,
        })?;

        let mut line = String::new();
        let read = stdin.read_line(&mut line).map_err(|source| Error::Io {
            operation: "read an answer from the console".to_string(),
            source,
        })?;
        if read == 0 {
            return Ok(false);
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer 'y' or 'n'."),
        }
    }
}
