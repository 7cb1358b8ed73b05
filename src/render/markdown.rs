//! Markdown rendering for structured documents.
//!
//! This is the context serializer: identical input always yields
//! byte-identical output, so rendered context can be cached, diffed, and
//! embedded in prompts without drift.

use crate::error::Result;
use crate::model::{Section, StructuredDocument, Table};

use super::RenderOptions;

/// Convert a structured document to Markdown.
pub fn to_markdown(doc: &StructuredDocument, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a whole document: sections first, then indexed tables.
    pub fn render(&self, doc: &StructuredDocument) -> Result<String> {
        let mut output = String::new();

        for section in &doc.sections {
            self.render_section(&mut output, section);
        }

        for (i, table) in doc.tables.iter().enumerate() {
            self.render_table(&mut output, i, table);
        }

        Ok(output.trim_end().to_string())
    }

    /// Render only the narrative sections.
    pub fn render_sections(&self, doc: &StructuredDocument) -> String {
        let mut output = String::new();
        for section in &doc.sections {
            self.render_section(&mut output, section);
        }
        output.trim_end().to_string()
    }

    /// Render only the tables, labeled by 1-based index.
    pub fn render_tables(&self, doc: &StructuredDocument) -> String {
        let mut output = String::new();
        for (i, table) in doc.tables.iter().enumerate() {
            self.render_table(&mut output, i, table);
        }
        output.trim_end().to_string()
    }

    fn render_section(&self, output: &mut String, section: &Section) {
        let marker = "#".repeat(self.options.heading_level as usize);
        output.push_str(&marker);
        output.push(' ');
        output.push_str(&section.title);
        output.push('\n');
        for line in &section.content {
            output.push_str(line);
            output.push('\n');
        }
        output.push('\n');
    }

    fn render_table(&self, output: &mut String, index: usize, table: &Table) {
        output.push_str(&format!("**{} {}:**\n", self.options.table_label, index + 1));

        if self.options.include_captions && table.has_caption() {
            output.push_str(&table.caption);
            output.push('\n');
        }

        output.push_str(&table_grid(table));
        output.push('\n');
    }
}

/// Render a table as a pipe-delimited Markdown grid.
///
/// One header row, one separator row, then one row per body row. Cells are
/// looked up per header and substitute the empty string when a row lacks a
/// header, so rendering is total even for rows built outside the
/// normalizer. Embedded newlines flatten to spaces to keep the grid valid.
pub fn table_grid(table: &Table) -> String {
    let mut out = String::new();

    out.push_str(&format!("| {} |\n", table.headers.join(" | ")));
    out.push_str(&format!(
        "| {} |\n",
        vec!["---"; table.headers.len()].join(" | ")
    ));

    for row in &table.rows {
        let cells: Vec<String> = table
            .headers
            .iter()
            .map(|h| row.get(h).unwrap_or("").replace('\n', " "))
            .collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    out
}
