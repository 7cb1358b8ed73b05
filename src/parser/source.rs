//! Document source capability trait.
//!
//! A document source supplies the body stream the structurer consumes,
//! hiding whatever format-specific tree navigation produced it. The crate
//! ships a .docx-backed source ([`super::DocxParser`]); tests and other
//! front ends can supply their own.

use crate::model::{BodyElement, ParagraphRecord, RawTable};

/// Access to a parsed document's body-level elements in source order.
pub trait DocumentSource {
    /// All body elements, paragraphs and tables interleaved, in document
    /// order. Paragraphs nested in table cells must not appear here.
    fn elements(&self) -> &[BodyElement];

    /// The top-level paragraph stream, in document order.
    fn paragraphs(&self) -> Vec<&ParagraphRecord> {
        self.elements()
            .iter()
            .filter_map(BodyElement::as_paragraph)
            .collect()
    }

    /// Raw tables with their element-stream positions, in document order.
    fn tables(&self) -> Vec<(usize, &RawTable)> {
        self.elements()
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_table().map(|t| (i, t)))
            .collect()
    }

    /// Text of the blocks preceding the element at `index`, nearest-first.
    ///
    /// This is the backward sibling scan used for caption recovery: it
    /// walks backward from `index` and stops at the first element that is
    /// not a paragraph, so only the contiguous run of paragraphs directly
    /// above a table is visible to the normalizer.
    fn preceding_blocks(&self, index: usize) -> Vec<String> {
        let mut blocks = Vec::new();
        for element in self.elements()[..index].iter().rev() {
            match element.as_paragraph() {
                Some(p) => blocks.push(p.text.clone()),
                None => break,
            }
        }
        blocks
    }
}

/// A body stream held in memory.
///
/// The output of the .docx backend, and a convenient way for tests to
/// exercise the structurer without any file format involved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBody {
    elements: Vec<BodyElement>,
}

impl ParsedBody {
    /// Create a body stream from elements in document order.
    pub fn new(elements: Vec<BodyElement>) -> Self {
        Self { elements }
    }
}

impl DocumentSource for ParsedBody {
    fn elements(&self) -> &[BodyElement] {
        &self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> ParsedBody {
        ParsedBody::new(vec![
            BodyElement::Paragraph(ParagraphRecord::heading("Tables")),
            BodyElement::Paragraph(ParagraphRecord::body("Ranges below.")),
            BodyElement::Table(RawTable::from_rows([vec!["Test"]])),
            BodyElement::Paragraph(ParagraphRecord::body("After.")),
            BodyElement::Table(RawTable::from_rows([vec!["Assay"]])),
        ])
    }

    #[test]
    fn test_paragraph_and_table_streams() {
        let body = body();
        assert_eq!(body.paragraphs().len(), 3);

        let tables = body.tables();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].0, 2);
        assert_eq!(tables[1].0, 4);
    }

    #[test]
    fn test_preceding_blocks_nearest_first() {
        let body = body();
        let blocks = body.preceding_blocks(2);
        assert_eq!(blocks, vec!["Ranges below.", "Tables"]);
    }

    #[test]
    fn test_preceding_blocks_stop_at_table() {
        let body = body();
        // The scan for the second table stops at the first table.
        let blocks = body.preceding_blocks(4);
        assert_eq!(blocks, vec!["After."]);
    }

    #[test]
    fn test_preceding_blocks_at_start() {
        let body = body();
        assert!(body.preceding_blocks(0).is_empty());
    }
}
