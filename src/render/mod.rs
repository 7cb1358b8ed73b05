//! Rendering module for converting structured documents to output formats.

mod json;
mod markdown;
mod options;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::{table_grid, to_markdown, MarkdownRenderer};
pub use options::RenderOptions;
pub use text::to_text;
