//! Export command - write the book as CSV

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::{App, config::DEFAULT_BOOK_FILE},
    export::BookCsvExporter,
};

#[derive(Parser, Debug)]
#[command(about = "Export the learned book as CSV")]
pub struct ExportArgs {
    /// Path to the book file
    #[arg(long)]
    pub book: Option<PathBuf>,

    /// Output CSV file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let path = args.book.unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_FILE));
    let app = App::new();
    let book = app
        .load_book(&path)
        .with_context(|| format!("no readable book at {path:?}"))?;

    BookCsvExporter::export(&book, &args.output)?;
    println!("Exported {} entries to {:?}", book.len(), args.output);
    Ok(())
}
