//! Raw body stream types supplied by a document source.

use super::ParagraphRecord;
use serde::{Deserialize, Serialize};

/// A raw table grid as read from the source: rows of trimmed cell text,
/// header row included, before any normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    /// Cell text by row, then column
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create an empty raw table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a raw table from string rows.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Check if the grid has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One body-level element of a document, in source order.
///
/// The backward caption scan depends on this ordering: the blocks that
/// precede a table are exactly the contiguous run of `Paragraph` elements
/// before it in the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyElement {
    /// A top-level paragraph (never one nested in a table cell)
    Paragraph(ParagraphRecord),
    /// A table grid
    Table(RawTable),
}

impl BodyElement {
    /// The paragraph record, if this element is a paragraph.
    pub fn as_paragraph(&self) -> Option<&ParagraphRecord> {
        match self {
            BodyElement::Paragraph(p) => Some(p),
            BodyElement::Table(_) => None,
        }
    }

    /// The raw table, if this element is a table.
    pub fn as_table(&self) -> Option<&RawTable> {
        match self {
            BodyElement::Table(t) => Some(t),
            BodyElement::Paragraph(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_table_from_rows() {
        let raw = RawTable::from_rows([vec!["Test", "Specimen"], vec!["Glucose", "Plasma"]]);
        assert_eq!(raw.rows.len(), 2);
        assert_eq!(raw.rows[0][1], "Specimen");
    }

    #[test]
    fn test_body_element_accessors() {
        let p = BodyElement::Paragraph(ParagraphRecord::body("x"));
        assert!(p.as_paragraph().is_some());
        assert!(p.as_table().is_none());
    }
}
