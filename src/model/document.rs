//! Document-level types.

use super::Table;
use serde::{Deserialize, Serialize};

/// Title given to body text that appears before the first heading.
pub const DEFAULT_SECTION_TITLE: &str = "Introduction";

/// A structured view of one source document: titled sections in source
/// order, plus a flat list of tables in source order.
///
/// Tables are deliberately not nested inside sections; consumers that need
/// a section/table association re-derive it positionally or by caption.
/// All contained data is owned and immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredDocument {
    /// Narrative sections in source order
    pub sections: Vec<Section>,

    /// Tables in source order (flat, parallel to sections)
    pub tables: Vec<Table>,
}

impl StructuredDocument {
    /// Create a new empty structured document.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get the number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Check if the document holds no content at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.tables.is_empty()
    }

    /// Find the first section with the given title (exact match).
    pub fn find_section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Get plain text content of every section, without any markers.
    pub fn plain_text(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for StructuredDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// A titled, ordered block of body text extracted from a document's
/// narrative portions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title (never empty)
    pub title: String,

    /// Body text lines in source order
    pub content: Vec<String>,

    /// Nested child sections. Reserved: the base splitter never populates
    /// this, but downstream consumers may.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<Section>,
}

impl Section {
    /// Create a new section with the given title and no content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
            subsections: Vec::new(),
        }
    }

    /// Create a section with title and content lines.
    pub fn with_content<S: Into<String>>(
        title: impl Into<String>,
        content: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into_iter().map(Into::into).collect(),
            subsections: Vec::new(),
        }
    }

    /// Check if the section has no body text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Title followed by content lines, newline-joined.
    pub fn plain_text(&self) -> String {
        let mut out = self.title.clone();
        for line in &self.content {
            out.push('\n');
            out.push_str(line);
        }
        out
    }
}
