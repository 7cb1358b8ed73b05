//! Plain text rendering for structured documents.

use crate::error::Result;
use crate::model::StructuredDocument;

use super::RenderOptions;

/// Convert a structured document to plain text: section titles and body
/// lines, then tab-separated tables, with captions when enabled.
pub fn to_text(doc: &StructuredDocument, options: &RenderOptions) -> Result<String> {
    let mut blocks: Vec<String> = doc.sections.iter().map(|s| s.plain_text()).collect();

    for table in &doc.tables {
        if options.include_captions && table.has_caption() {
            blocks.push(format!("{}\n{}", table.caption, table.plain_text()));
        } else {
            blocks.push(table.plain_text());
        }
    }

    Ok(blocks.join("\n\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Row, Section, Table};

    #[test]
    fn test_to_text() {
        let doc = StructuredDocument {
            sections: vec![Section::with_content("Safety", ["Wear gloves."])],
            tables: vec![Table {
                caption: "Panel".to_string(),
                headers: vec!["Test".to_string()],
                rows: vec![Row::from_pairs([("Test", "Glucose")])],
            }],
        };

        let text = to_text(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(text, "Safety\nWear gloves.\n\nTest\nGlucose");

        let with_captions = to_text(&doc, &RenderOptions::new().with_captions(true)).unwrap();
        assert!(with_captions.contains("Panel\nTest\nGlucose"));
    }
}
