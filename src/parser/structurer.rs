//! Document structuring orchestration.

use crate::error::Result;
use crate::model::StructuredDocument;

use super::{table, DocumentSource, ParseOptions, SectionSplitter};

/// Structure a document source into sections and tables.
///
/// Runs the section splitter over the paragraph stream and the table
/// normalizer over every table in document order, each with the preceding
/// blocks its position implies. Either a complete [`StructuredDocument`]
/// is returned or the first error aborts the whole pass; there is no
/// partial-success mode.
pub fn structure<S: DocumentSource + ?Sized>(
    source: &S,
    options: &ParseOptions,
) -> Result<StructuredDocument> {
    let paragraphs: Vec<_> = source.paragraphs().into_iter().cloned().collect();
    let sections = SectionSplitter::new(options.clone()).split(&paragraphs);

    let mut tables = Vec::new();
    for (index, raw) in source.tables() {
        let preceding = source.preceding_blocks(index);
        tables.push(table::normalize(raw, &preceding)?);
    }

    log::debug!(
        "structured document: {} sections, {} tables",
        sections.len(),
        tables.len()
    );

    Ok(StructuredDocument { sections, tables })
}
