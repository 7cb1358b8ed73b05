//! Error types for the labdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for labdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while structuring a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not an OOXML (.docx) package.
    #[error("Unknown file format: not a valid .docx package")]
    UnknownFormat,

    /// The document could not be opened or its XML parsed.
    #[error("Document load error: {0}")]
    DocumentLoad(String),

    /// A required package part is missing from the archive.
    #[error("Missing package part: {0}")]
    MissingEntry(String),

    /// A table has no rows at all, so no header row can be extracted.
    /// Structuring of the containing document is aborted; there is no
    /// partial document model.
    #[error("Malformed table: {0}")]
    MalformedTable(String),

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Error writing an audit entry.
    #[error("Audit error: {0}")]
    Audit(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => {
                Error::MissingEntry("archive entry not found".to_string())
            }
            zip::result::ZipError::InvalidArchive(_) => Error::UnknownFormat,
            _ => Error::DocumentLoad(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::DocumentLoad(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}
