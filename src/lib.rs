//! # labdoc
//!
//! Structured content extraction from .docx laboratory protocol documents.
//!
//! This library parses Word documents into an immutable intermediate
//! representation (titled sections plus header-keyed tables with recovered
//! captions) and renders it deterministically as Markdown, plain text, or
//! JSON for use as grounding context in a chat assistant or report.
//!
//! ## Quick Start
//!
//! ```no_run
//! use labdoc::{parse_file, render};
//!
//! fn main() -> labdoc::Result<()> {
//!     // Structure a protocol document
//!     let doc = parse_file("haematology.docx")?;
//!
//!     // Render it as prompt-ready Markdown
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Section splitting**: heading styles and bold lead runs segment
//!   narrative text into titled sections
//! - **Table normalization**: header-keyed rows with caption recovery from
//!   preceding paragraphs
//! - **Multiple output formats**: Markdown, plain text, JSON
//! - **Corpus preloading**: named document sets loaded in parallel
//! - **Session state**: explicit per-conversation cache and history
//! - **Audit trail**: hashed, compliance-checked query records

pub mod audit;
pub mod chat;
pub mod corpus;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod prompt;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use audit::{AuditEntry, AuditSink, JsonlAuditSink};
pub use chat::{ChatClient, ChunkStream};
pub use corpus::Corpus;
pub use detect::{is_docx, is_docx_bytes};
pub use error::{Error, Result};
pub use model::{
    BodyElement, ParagraphRecord, RawTable, Row, Section, StructuredDocument, Table,
    DEFAULT_SECTION_TITLE,
};
pub use parser::{DocumentSource, DocxParser, ParseOptions, ParsedBody, SectionSplitter};
pub use prompt::{PromptBuilder, QueryKind};
pub use render::{JsonFormat, RenderOptions};
pub use session::{Message, Role, Session};

use std::io::Read;
use std::path::Path;

/// Parse a .docx file and return its structured form.
///
/// # Example
///
/// ```no_run
/// use labdoc::parse_file;
///
/// let doc = parse_file("haematology.docx").unwrap();
/// println!("Sections: {}", doc.section_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<StructuredDocument> {
    DocxParser::open(path)?.parse()
}

/// Parse a .docx file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<StructuredDocument> {
    DocxParser::open_with_options(path, options)?.parse()
}

/// Parse a .docx package from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<StructuredDocument> {
    DocxParser::from_bytes(data)?.parse()
}

/// Parse a .docx package from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<StructuredDocument> {
    DocxParser::from_bytes_with_options(data, options)?.parse()
}

/// Parse a .docx package from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<StructuredDocument> {
    DocxParser::from_reader(reader)?.parse()
}

/// Extract plain section text from a .docx file.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.plain_text())
}

/// Convert a .docx file to Markdown with default options.
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, &RenderOptions::default())
}

/// Convert a .docx file to JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for structuring and rendering protocol documents.
///
/// # Example
///
/// ```no_run
/// use labdoc::Labdoc;
///
/// let markdown = Labdoc::new()
///     .keep_empty_sections()
///     .with_captions()
///     .parse("haematology.docx")?
///     .to_markdown()?;
/// # Ok::<(), labdoc::Error>(())
/// ```
pub struct Labdoc {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Labdoc {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Retain empty-bodied section headings.
    pub fn keep_empty_sections(mut self) -> Self {
        self.parse_options = self.parse_options.keep_empty_sections();
        self
    }

    /// Set the title for untitled leading content.
    pub fn with_default_section_title(mut self, title: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_default_section_title(title);
        self
    }

    /// Emit table captions in rendered output.
    pub fn with_captions(mut self) -> Self {
        self.render_options = self.render_options.with_captions(true);
        self
    }

    /// Set the section heading level for Markdown output.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.render_options = self.render_options.with_heading_level(level);
        self
    }

    /// Parse a .docx file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<LabdocResult> {
        let document = DocxParser::open_with_options(path, self.parse_options)?.parse()?;
        Ok(LabdocResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a .docx package from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<LabdocResult> {
        let document = DocxParser::from_bytes_with_options(data, self.parse_options)?.parse()?;
        Ok(LabdocResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Labdoc {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of structuring a document, carrying the render options chosen on
/// the builder.
pub struct LabdocResult {
    /// The structured document
    pub document: StructuredDocument,
    render_options: RenderOptions,
}

impl LabdocResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the structured document.
    pub fn document(&self) -> &StructuredDocument {
        &self.document
    }
}
