//! .docx backend: ZIP container plus WordprocessingML streaming.
//!
//! Reads `word/document.xml` from the package and streams it with
//! quick-xml into a flat body stream of paragraph records and raw table
//! grids. Paragraph classification mirrors what the downstream splitter
//! needs: a `Heading*` paragraph style, or a bold first run.

use crate::detect::DOCUMENT_PART;
use crate::error::{Error, Result};
use crate::model::{BodyElement, ParagraphRecord, RawTable, StructuredDocument};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use super::{structurer, ParseOptions, ParsedBody};

/// Parser for .docx word-processing packages.
pub struct DocxParser {
    xml: String,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a .docx file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a .docx file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        log::debug!("opening docx package: {}", path.as_ref().display());
        let xml = read_document_part(file)?;
        Ok(Self { xml, options })
    }

    /// Parse a .docx package from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a .docx package from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let xml = read_document_part(Cursor::new(data))?;
        Ok(Self { xml, options })
    }

    /// Parse a .docx package from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a .docx package from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        // ZIP central directories live at the end of the stream, so the
        // whole input has to be buffered before the archive can be opened.
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Extract the body stream without structuring it.
    pub fn body(&self) -> Result<ParsedBody> {
        parse_body_xml(&self.xml)
    }

    /// Parse the package into a structured document.
    pub fn parse(&self) -> Result<StructuredDocument> {
        let body = self.body()?;
        structurer::structure(&body, &self.options)
    }
}

/// Pull `word/document.xml` out of the package.
fn read_document_part<R: Read + Seek>(reader: R) -> Result<String> {
    let mut archive = zip::ZipArchive::new(reader).map_err(|_| Error::UnknownFormat)?;
    let mut entry = match archive.by_name(DOCUMENT_PART) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(Error::MissingEntry(DOCUMENT_PART.to_string()))
        }
        Err(e) => return Err(e.into()),
    };
    let mut buffer = Vec::new();
    entry.read_to_end(&mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Value of the first attribute whose local name matches, ignoring any
/// namespace prefix.
fn attr_value(element: &BytesStart<'_>, local: &[u8]) -> Option<String> {
    for attr in element.attributes().flatten() {
        if attr.key.local_name().as_ref() == local {
            if let Ok(value) = attr.unescape_value() {
                return Some(value.into_owned());
            }
        }
    }
    None
}

/// A `w:b` with `w:val` of "0", "false" or "none" disables bold.
fn bold_enabled(element: &BytesStart<'_>) -> bool {
    match attr_value(element, b"val") {
        Some(v) => !matches!(v.as_str(), "0" | "false" | "none"),
        None => true,
    }
}

/// Stream the document body XML into ordered body elements.
fn parse_body_xml(xml: &str) -> Result<ParsedBody> {
    let mut reader = Reader::from_str(xml);
    let mut elements = Vec::new();

    // Top-level paragraph state
    let mut in_paragraph = false;
    let mut para_buf = String::new();
    let mut is_heading = false;
    let mut first_run_bold = false;

    // Run/property nesting used for classification
    let mut in_text = false;
    let mut in_run = false;
    let mut in_run_props = false;
    let mut in_para_props = false;
    let mut run_count = 0usize;

    // Table state; only the outermost table level becomes a grid, nested
    // table text flattens into the enclosing cell
    let mut table_depth = 0usize;
    let mut in_cell = false;
    let mut cell_buf = String::new();
    let mut current_row: Vec<String> = Vec::new();
    let mut current_table: Vec<Vec<String>> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    if table_depth == 0 {
                        in_paragraph = true;
                        para_buf.clear();
                        is_heading = false;
                        first_run_bold = false;
                        run_count = 0;
                    } else if in_cell && !cell_buf.is_empty() {
                        cell_buf.push('\n');
                    }
                }
                b"tbl" => {
                    table_depth += 1;
                    if table_depth == 1 {
                        current_table.clear();
                    }
                }
                b"tr" => {
                    if table_depth == 1 {
                        current_row = Vec::new();
                    }
                }
                b"tc" => {
                    if table_depth == 1 {
                        in_cell = true;
                        cell_buf.clear();
                    }
                }
                b"pPr" => in_para_props = true,
                b"r" => {
                    in_run = true;
                    if !in_para_props {
                        run_count += 1;
                    }
                }
                b"rPr" => {
                    if in_run {
                        in_run_props = true;
                    }
                }
                b"pStyle" => {
                    if in_para_props && table_depth == 0 {
                        if let Some(style) = attr_value(e, b"val") {
                            if style.starts_with("Heading") {
                                is_heading = true;
                            }
                        }
                    }
                }
                b"b" => {
                    if in_run_props && !in_para_props && run_count == 1 && table_depth == 0 {
                        first_run_bold = bold_enabled(e);
                    }
                }
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    if table_depth == 0 {
                        elements.push(BodyElement::Paragraph(ParagraphRecord::body("")));
                    } else if in_cell && !cell_buf.is_empty() {
                        cell_buf.push('\n');
                    }
                }
                b"pStyle" => {
                    if in_para_props && table_depth == 0 {
                        if let Some(style) = attr_value(e, b"val") {
                            if style.starts_with("Heading") {
                                is_heading = true;
                            }
                        }
                    }
                }
                b"b" => {
                    if in_run_props && !in_para_props && run_count == 1 && table_depth == 0 {
                        first_run_bold = bold_enabled(e);
                    }
                }
                b"tab" => append_text(&mut para_buf, &mut cell_buf, in_cell, in_paragraph, "\t"),
                b"br" => append_text(&mut para_buf, &mut cell_buf, in_cell, in_paragraph, "\n"),
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = e.unescape()?;
                    append_text(&mut para_buf, &mut cell_buf, in_cell, in_paragraph, &text);
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"r" => {
                    in_run = false;
                    in_run_props = false;
                }
                b"rPr" => in_run_props = false,
                b"pPr" => in_para_props = false,
                b"p" => {
                    if table_depth == 0 && in_paragraph {
                        in_paragraph = false;
                        elements.push(BodyElement::Paragraph(ParagraphRecord {
                            text: std::mem::take(&mut para_buf),
                            is_heading,
                            is_emphasized: first_run_bold,
                        }));
                    }
                }
                b"tc" => {
                    if table_depth == 1 && in_cell {
                        in_cell = false;
                        current_row.push(cell_buf.trim().to_string());
                    }
                }
                b"tr" => {
                    if table_depth == 1 {
                        current_table.push(std::mem::take(&mut current_row));
                    }
                }
                b"tbl" => {
                    if table_depth == 1 {
                        elements.push(BodyElement::Table(RawTable {
                            rows: std::mem::take(&mut current_table),
                        }));
                    }
                    table_depth = table_depth.saturating_sub(1);
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok(ParsedBody::new(elements))
}

fn append_text(
    para_buf: &mut String,
    cell_buf: &mut String,
    in_cell: bool,
    in_paragraph: bool,
    text: &str,
) {
    if in_cell {
        cell_buf.push_str(text);
    } else if in_paragraph {
        para_buf.push_str(text);
    }
}
