//! Export functionality for the learned book
//!
//! Currently supports CSV export of book entries for inspection in
//! spreadsheet tools.

mod book_csv;

pub use book_csv::BookCsvExporter;
