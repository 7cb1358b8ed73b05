//! Document parsing and structuring module.

mod docx;
mod options;
mod source;
mod splitter;
mod structurer;
mod table;

pub use docx::DocxParser;
pub use options::ParseOptions;
pub use source::{DocumentSource, ParsedBody};
pub use splitter::SectionSplitter;
pub use structurer::structure;
pub use table::{normalize, recover_caption};
