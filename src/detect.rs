//! OOXML (.docx) package detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// The package part holding the document body.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Check if bytes start with the ZIP container magic.
pub fn is_zip_magic(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

/// Validate that a readable archive is a word-processing package.
///
/// # Errors
///
/// * [`Error::UnknownFormat`] when the data is not a ZIP archive
/// * [`Error::MissingEntry`] when the archive lacks `word/document.xml`
pub fn probe_package<R: Read + Seek>(reader: R) -> Result<()> {
    let mut archive = zip::ZipArchive::new(reader).map_err(|_| Error::UnknownFormat)?;
    // The entry handle borrows the archive; end the borrow in a statement
    // rather than the block's tail expression.
    let probe = match archive.by_name(DOCUMENT_PART) {
        Ok(_) => Ok(()),
        Err(zip::result::ZipError::FileNotFound) => {
            Err(Error::MissingEntry(DOCUMENT_PART.to_string()))
        }
        Err(e) => Err(e.into()),
    };
    probe
}

/// Check if bytes form a valid .docx package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    is_zip_magic(data) && probe_package(Cursor::new(data)).is_ok()
}

/// Check if a file is a valid .docx package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    probe_package(file).is_ok()
}
