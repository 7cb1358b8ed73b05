//! Section splitting over a paragraph stream.
//!
//! Segments a flat sequence of paragraph records into titled sections using
//! typographic cues: a paragraph that carries a heading style, or whose
//! first run is bold, starts a new section. Everything else accumulates as
//! body text under the current title.

use crate::model::{ParagraphRecord, Section};

use super::ParseOptions;

/// Splits paragraph streams into sections according to [`ParseOptions`].
#[derive(Debug, Clone)]
pub struct SectionSplitter {
    options: ParseOptions,
}

impl SectionSplitter {
    /// Create a splitter with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Split a paragraph stream into sections.
    ///
    /// Blank paragraphs are skipped. The first accumulator takes the
    /// configured default title ("Introduction" unless overridden), so
    /// leading body text with no heading still lands in a titled section.
    ///
    /// A section is emitted only once it has body text. With default
    /// options this means a heading immediately followed by another heading
    /// is dropped and its title lost; `keep_empty_sections` retains such
    /// sections instead.
    pub fn split(&self, paragraphs: &[ParagraphRecord]) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut current = Section::new(&self.options.default_section_title);
        // The initial accumulator was not started by a heading; even in
        // keep mode it is only emitted once it has content.
        let mut implicit = true;

        for para in paragraphs {
            let text = para.text.trim();
            if text.is_empty() {
                continue;
            }

            if para.is_title() {
                if self.should_emit(&current, implicit) {
                    sections.push(current);
                }
                current = Section::new(text);
                implicit = false;
            } else {
                current.content.push(text.to_string());
            }
        }

        if self.should_emit(&current, implicit) {
            sections.push(current);
        }

        sections
    }

    fn should_emit(&self, section: &Section, implicit: bool) -> bool {
        !section.is_empty() || (self.options.keep_empty_sections && !implicit)
    }
}

impl Default for SectionSplitter {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}
