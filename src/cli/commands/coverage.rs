//! Coverage command - how much of the decision space the book covers

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    app::{App, config::DEFAULT_BOOK_FILE},
    cli::output,
    tictactoe::opponent_decision_states,
};

#[derive(Parser, Debug)]
#[command(about = "Measure book coverage of the apprentice's decision positions")]
pub struct CoverageArgs {
    /// Path to the book file
    #[arg(long)]
    pub book: Option<PathBuf>,
}

pub fn execute(args: CoverageArgs) -> Result<()> {
    let path = args.book.unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_FILE));
    let app = App::new();
    let book = app.load_book_or_default(&path);

    let spinner = output::create_spinner("Enumerating reachable positions...");
    let states = opponent_decision_states();
    spinner.finish_and_clear();

    let pb = output::create_lookup_progress(states.len() as u64);
    let mut known = 0;
    let mut stale = 0;
    for state in &states {
        match book.recall(state) {
            Ok(Some(_)) => known += 1,
            Ok(None) => {}
            Err(_) => stale += 1,
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let coverage = if states.is_empty() {
        0.0
    } else {
        100.0 * known as f64 / states.len() as f64
    };

    output::print_section("Book coverage");
    output::print_kv("Decision positions", &states.len().to_string());
    output::print_kv("Known", &known.to_string());
    output::print_kv("Stale entries", &stale.to_string());
    output::print_kv("Coverage", &format!("{coverage:.1}%"));
    Ok(())
}
