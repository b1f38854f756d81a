//! Play command - the interactive session against the apprentice

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::{
    advisor::Advisor,
    app::{App, SessionConfig},
    book::MoveBook,
    cli::{input, output, tutor::ConsoleTutor},
    tictactoe::{Game, GameOutcome, Player},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play against the apprentice")]
pub struct PlayArgs {
    /// Path to the book file
    #[arg(long)]
    pub book: Option<PathBuf>,

    /// Stop after this many rounds instead of asking to continue
    #[arg(long)]
    pub rounds: Option<usize>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = SessionConfig::new();
    if let Some(path) = args.book {
        config = config.with_book_path(path);
    }
    if let Some(rounds) = args.rounds {
        config = config.with_max_rounds(rounds);
    }

    run_session(&App::new(), &config)
}

/// Run rounds until the player declines or the round cap is reached.
pub fn run_session(app: &App, config: &SessionConfig) -> Result<()> {
    let mut book = load_book_with_warning(app, &config.book_path);

    println!("Welcome! You play X and open every round; the apprentice answers as O.");
    if book.is_empty() {
        println!("The apprentice knows nothing yet. It will ask you for every move.");
    } else {
        println!("The apprentice has learned {} positions so far.", book.len());
    }

    let mut played = 0;
    loop {
        play_round(app, &mut book, &config.book_path)?;
        played += 1;

        if let Some(max) = config.max_rounds {
            if played >= max {
                break;
            }
        }
        if !input::prompt_yes_no("Play another round? (y/n): ")? {
            break;
        }
    }

    println!("Goodbye, and thanks for the lessons!");
    Ok(())
}

/// Load the book, starting empty (with a warning) when the file is corrupt.
fn load_book_with_warning(app: &App, path: &Path) -> MoveBook {
    if !path.exists() {
        return MoveBook::new();
    }
    match app.load_book(path) {
        Ok(book) => book,
        Err(err) => {
            eprintln!("warning: could not read the book at {path:?}: {err}");
            eprintln!("warning: starting with an empty book");
            MoveBook::new()
        }
    }
}

fn play_round(app: &App, book: &mut MoveBook, book_path: &Path) -> Result<()> {
    let mut game = Game::new();
    let mut tutor = ConsoleTutor::new();

    loop {
        println!("{}", output::render_board(game.current_state()));

        let position = if game.current_state().to_move == Player::X {
            input::prompt_position("Your move (1-9): ", game.current_state())?
        } else {
            println!("Apprentice's turn...");
            let advice = Advisor::resolve(book, game.current_state(), &mut tutor)?;

            // Persist right after learning so a lesson is never lost; a failed
            // write is reported but does not end the game.
            if advice.was_learned() {
                if let Err(err) = app.save_book(book, book_path) {
                    eprintln!("warning: could not save the book to {book_path:?}: {err}");
                }
            }

            let position = advice.position();
            println!("The apprentice plays cell {}.", position.display_value());
            position
        };

        game.play(position)?;

        if let Some(outcome) = game.outcome() {
            println!("{}", output::render_board(game.current_state()));
            match outcome {
                GameOutcome::Win(Player::X) => println!("Congratulations, you won!"),
                GameOutcome::Win(Player::O) => {
                    println!("The apprentice has won. Thanks for teaching it so well.");
                }
                GameOutcome::Draw => println!("It's a draw!"),
            }
            return Ok(());
        }
    }
}
