//! Book command - inspect the apprentice's learned moves

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    app::{App, config::DEFAULT_BOOK_FILE},
    cli::output,
};

#[derive(Parser, Debug)]
#[command(about = "Show the apprentice's learned moves")]
pub struct BookArgs {
    /// Path to the book file
    #[arg(long)]
    pub book: Option<PathBuf>,
}

pub fn execute(args: BookArgs) -> Result<()> {
    let path = args.book.unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_FILE));
    let app = App::new();
    let book = app.load_book_or_default(&path);

    output::print_section("Learned positions");
    if book.is_empty() {
        println!("The book at {path:?} is empty.");
        return Ok(());
    }

    for (key, position) in book.entries() {
        output::print_kv(key.as_str(), &format!("cell {}", position.display_value()));
    }
    println!();
    output::print_kv("Total", &book.len().to_string());
    Ok(())
}
