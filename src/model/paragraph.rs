//! Paragraph capability record.

use serde::{Deserialize, Serialize};

/// A paragraph-level text block with the typographic cues the section
/// splitter needs.
///
/// This is the seam that decouples section splitting from any particular
/// rich-text library: a document source classifies each paragraph once and
/// hands over plain flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphRecord {
    /// Paragraph text as extracted (not yet trimmed)
    pub text: String,

    /// Whether the paragraph carries a heading style
    pub is_heading: bool,

    /// Whether the paragraph's first run is bold
    pub is_emphasized: bool,
}

impl ParagraphRecord {
    /// Create a plain body paragraph.
    pub fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_heading: false,
            is_emphasized: false,
        }
    }

    /// Create a heading-styled paragraph.
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_heading: true,
            is_emphasized: false,
        }
    }

    /// Create a bold-emphasized paragraph.
    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_heading: false,
            is_emphasized: true,
        }
    }

    /// Whether the trimmed text is empty.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether this paragraph starts a new section.
    pub fn is_title(&self) -> bool {
        self.is_heading || self.is_emphasized
    }
}
