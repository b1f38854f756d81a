//! Apprentice CLI - console Tic-Tac-Toe against an opponent that learns
//! from you
//!
//! Running with no arguments starts an interactive session. Additional
//! commands inspect and export the knowledge the apprentice has gathered:
//! - Inspect the learned book
//! - Measure coverage of the decision space
//! - Export the book as CSV

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "apprentice")]
#[command(version, about = "Console Tic-Tac-Toe against an opponent that learns from you", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session (the default)
    Play(apprentice::cli::commands::play::PlayArgs),

    /// Show the apprentice's learned moves
    Book(apprentice::cli::commands::book::BookArgs),

    /// Measure book coverage of the decision positions
    Coverage(apprentice::cli::commands::coverage::CoverageArgs),

    /// Export the learned book as CSV
    Export(apprentice::cli::commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => apprentice::cli::commands::play::execute(Default::default()),
        Some(Commands::Play(args)) => apprentice::cli::commands::play::execute(args),
        Some(Commands::Book(args)) => apprentice::cli::commands::book::execute(args),
        Some(Commands::Coverage(args)) => apprentice::cli::commands::coverage::execute(args),
        Some(Commands::Export(args)) => apprentice::cli::commands::export::execute(args),
    }
}
