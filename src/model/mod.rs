//! Document model types for structured content representation.
//!
//! This module defines the intermediate representation (IR) that bridges
//! .docx parsing and context rendering. The model is format-agnostic: any
//! source that can supply paragraph records and raw table grids can be
//! structured into it.

mod body;
mod document;
mod paragraph;
mod table;

pub use body::{BodyElement, RawTable};
pub use document::{Section, StructuredDocument, DEFAULT_SECTION_TITLE};
pub use paragraph::ParagraphRecord;
pub use table::{Row, Table};
