//! Table normalization.
//!
//! Converts a raw cell grid into a header-keyed table and recovers caption
//! text from the paragraphs that immediately precede the table in the
//! source stream.

use crate::error::{Error, Result};
use crate::model::{RawTable, Row, Table};

/// Normalize a raw grid into a [`Table`].
///
/// The first raw row supplies the headers (trimmed; duplicate labels are
/// permitted but only the first column with a label is addressable by it).
/// Every subsequent row is zipped positionally against the headers: short
/// rows are padded with empty strings, and cells beyond the header count
/// are dropped. Dropping is a documented data-loss policy, not an error.
///
/// `preceding_blocks` holds the text of the paragraph-like blocks before
/// the table, nearest-first; see [`recover_caption`].
///
/// # Errors
///
/// Returns [`Error::MalformedTable`] when the grid has no rows at all,
/// since no header row can be extracted.
pub fn normalize(raw: &RawTable, preceding_blocks: &[String]) -> Result<Table> {
    let Some(header_row) = raw.rows.first() else {
        return Err(Error::MalformedTable(
            "table has no rows; a header row is required".to_string(),
        ));
    };

    let headers: Vec<String> = header_row.iter().map(|c| c.trim().to_string()).collect();

    let rows = raw.rows[1..]
        .iter()
        .map(|cells| {
            let mut row = Row::new();
            for (i, header) in headers.iter().enumerate() {
                let text = cells.get(i).map(|c| c.trim()).unwrap_or("");
                row.push(header.clone(), text);
            }
            row
        })
        .collect();

    Ok(Table {
        caption: recover_caption(preceding_blocks),
        headers,
        rows,
    })
}

/// Recover caption text from preceding blocks.
///
/// Blocks arrive nearest-first, already cut off at the first non-paragraph
/// structural element by the document source. Non-empty fragments are
/// collected, reversed back into reading order, and joined with newlines.
/// An empty result is valid.
pub fn recover_caption(preceding_blocks: &[String]) -> String {
    let mut fragments: Vec<&str> = preceding_blocks
        .iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .collect();
    fragments.reverse();
    fragments.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_blocks() -> Vec<String> {
        Vec::new()
    }

    #[test]
    fn test_normalize_basic() {
        let raw = RawTable::from_rows([
            vec!["Test", "Specimen"],
            vec!["Glucose", "Plasma"],
            vec!["Sodium", "Serum"],
        ]);

        let table = normalize(&raw, &no_blocks()).unwrap();
        assert_eq!(table.headers, vec!["Test", "Specimen"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0].get("Test"), Some("Glucose"));
        assert_eq!(table.rows[1].get("Specimen"), Some("Serum"));
    }

    #[test]
    fn test_short_row_padded_with_empty() {
        let raw = RawTable::from_rows([
            vec!["Test", "Specimen"],
            vec!["Glucose", "Plasma"],
            vec!["Sodium"],
        ]);

        let table = normalize(&raw, &no_blocks()).unwrap();
        assert_eq!(table.rows[1].get("Test"), Some("Sodium"));
        assert_eq!(table.rows[1].get("Specimen"), Some(""));
        // Every row carries exactly one entry per header.
        for row in &table.rows {
            assert_eq!(row.len(), table.headers.len());
        }
    }

    #[test]
    fn test_extra_cells_dropped() {
        let raw = RawTable::from_rows([
            vec!["Test"],
            vec!["Glucose", "stray", "cells"],
        ]);

        let table = normalize(&raw, &no_blocks()).unwrap();
        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.rows[0].get("Test"), Some("Glucose"));
    }

    #[test]
    fn test_empty_grid_is_malformed() {
        let raw = RawTable::new();
        let err = normalize(&raw, &no_blocks()).unwrap_err();
        assert!(matches!(err, Error::MalformedTable(_)));
    }

    #[test]
    fn test_header_only_table() {
        let raw = RawTable::from_rows([vec!["Test", "Specimen"]]);
        let table = normalize(&raw, &no_blocks()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_headers_trimmed_duplicates_kept() {
        let raw = RawTable::from_rows([
            vec![" Test ", "Test"],
            vec!["Glucose", "Sodium"],
        ]);

        let table = normalize(&raw, &no_blocks()).unwrap();
        assert_eq!(table.headers, vec!["Test", "Test"]);
        // First column shadows the duplicate.
        assert_eq!(table.rows[0].get("Test"), Some("Glucose"));
    }

    #[test]
    fn test_caption_reading_order() {
        let blocks = vec![
            "nearest line".to_string(),
            "".to_string(),
            "farthest line".to_string(),
        ];
        assert_eq!(recover_caption(&blocks), "farthest line\nnearest line");
    }

    #[test]
    fn test_caption_empty_when_no_text() {
        assert_eq!(recover_caption(&no_blocks()), "");
        assert_eq!(recover_caption(&["  ".to_string()]), "");
    }

    #[test]
    fn test_caption_attached_to_table() {
        let raw = RawTable::from_rows([vec!["Test"], vec!["Glucose"]]);
        let blocks = vec!["Reference ranges below.".to_string()];
        let table = normalize(&raw, &blocks).unwrap();
        assert_eq!(table.caption, "Reference ranges below.");
        assert!(table.has_caption());
    }
}
