//! Table types.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A structured grid of labeled data extracted from a document, with an
/// optional recovered caption.
///
/// Immutable once constructed by the table normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Explanatory text recovered from paragraphs immediately preceding the
    /// table in document order; empty when no such text exists.
    pub caption: String,

    /// Header labels in column order. Duplicates are permitted, but only
    /// the first column with a given label is addressable by that label.
    pub headers: Vec<String>,

    /// Body rows in source order
    pub rows: Vec<Row>,
}

impl Table {
    /// Get the number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Check if the table has no body rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if any caption text was recovered.
    pub fn has_caption(&self) -> bool {
        !self.caption.is_empty()
    }

    /// Tab-separated plain text, one line per row, headers first.
    pub fn plain_text(&self) -> String {
        let mut lines = vec![self.headers.join("\t")];
        for row in &self.rows {
            let cells: Vec<&str> = self
                .headers
                .iter()
                .map(|h| row.get(h).unwrap_or(""))
                .collect();
            lines.push(cells.join("\t"));
        }
        lines.join("\n")
    }
}

/// One table row: an ordered mapping from header label to cell text.
///
/// A row always holds exactly as many entries as its parent table has
/// headers; cells missing in the source appear as empty strings. Lookup by
/// label returns the first matching column, so duplicate header labels
/// shadow later columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    entries: Vec<(String, String)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from (header, text) pairs in column order.
    pub fn from_pairs<H, T>(pairs: impl IntoIterator<Item = (H, T)>) -> Self
    where
        H: Into<String>,
        T: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(h, t)| (h.into(), t.into()))
                .collect(),
        }
    }

    pub(crate) fn push(&mut self, header: impl Into<String>, text: impl Into<String>) {
        self.entries.push((header.into(), text.into()));
    }

    /// Cell text for the first column with the given header label.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, t)| t.as_str())
    }

    /// Number of entries (equals the parent table's header count).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the row has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(h, t)| (h.as_str(), t.as_str()))
    }
}

// Rows serialize as JSON maps in column order, matching the shape a
// downstream prompt builder embeds directly.
impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (header, text) in &self.entries {
            map.serialize_entry(header, text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = Row;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of header labels to cell text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Row, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((header, text)) = access.next_entry::<String, String>()? {
                    entries.push((header, text));
                }
                Ok(Row { entries })
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}
