//! CSV export of the move book

use std::path::Path;

use crate::{Result, book::MoveBook};

/// Exporter writing book entries as CSV rows.
///
/// Columns: `position_key` (the board encoding), `cell` (the 0-8 index the
/// apprentice will play) and `display_cell` (the 1-9 digit shown on the
/// console board).
pub struct BookCsvExporter;

impl BookCsvExporter {
    /// Write the book to a CSV file at `path`.
    ///
    /// Rows come out in key order, matching the JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or a row fails to
    /// write.
    pub fn export(book: &MoveBook, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["position_key", "cell", "display_cell"])?;

        for (key, position) in book.entries() {
            let cell = position.value().to_string();
            let display = position.display_value().to_string();
            writer.write_record([key.as_str(), cell.as_str(), display.as_str()])?;
        }

        writer.flush().map_err(|source| crate::Error::Io {
            operation: format!("flush CSV export to {path:?}"),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{tictactoe::BoardState, types::Position};

    #[test]
    fn test_export_writes_header_and_rows() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("book.csv");

        let mut book = MoveBook::new();
        let board = BoardState::new().make_move(4).unwrap();
        book.learn(board.key(), Position::new(0).unwrap());

        BookCsvExporter::export(&book, &path).expect("Failed to export");

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("position_key,cell,display_cell"));
        assert_eq!(lines.next(), Some("....X...._O,0,1"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_empty_book_writes_header_only() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("empty.csv");

        BookCsvExporter::export(&MoveBook::new(), &path).expect("Failed to export");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), "position_key,cell,display_cell");
    }
}
