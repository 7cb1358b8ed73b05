//! Parsing options and configuration.

use crate::model::DEFAULT_SECTION_TITLE;

/// Options for structuring documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Title used for leading body text with no preceding heading
    pub default_section_title: String,

    /// Keep sections whose heading is immediately followed by another
    /// heading (no body text in between). Off by default: such orphan
    /// headings are dropped and their titles lost.
    pub keep_empty_sections: bool,

    /// Whether corpus-level loading may use parallel processing
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title for untitled leading content.
    pub fn with_default_section_title(mut self, title: impl Into<String>) -> Self {
        self.default_section_title = title.into();
        self
    }

    /// Retain empty-bodied section headings instead of dropping them.
    pub fn keep_empty_sections(mut self) -> Self {
        self.keep_empty_sections = true;
        self
    }

    /// Enable or disable parallel corpus loading.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel corpus loading.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_section_title: DEFAULT_SECTION_TITLE.to_string(),
            keep_empty_sections: false,
            parallel: true,
        }
    }
}
