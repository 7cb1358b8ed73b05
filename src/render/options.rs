//! Rendering options and configuration.

/// Options for rendering structured documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Heading level used for section titles (1-6)
    pub heading_level: u8,

    /// Emit recovered captions above table grids. Off by default: the
    /// prompt format labels tables by index only.
    pub include_captions: bool,

    /// Label prefix for table headers ("Table" -> "**Table 1:**")
    pub table_label: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading level for section titles.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 6);
        self
    }

    /// Enable or disable caption emission.
    pub fn with_captions(mut self, include: bool) -> Self {
        self.include_captions = include;
        self
    }

    /// Set the table label prefix.
    pub fn with_table_label(mut self, label: impl Into<String>) -> Self {
        self.table_label = label.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading_level: 3,
            include_captions: false,
            table_label: "Table".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_heading_level(2)
            .with_captions(true)
            .with_table_label("Grid");

        assert_eq!(options.heading_level, 2);
        assert!(options.include_captions);
        assert_eq!(options.table_label, "Grid");
    }

    #[test]
    fn test_heading_level_clamped() {
        assert_eq!(RenderOptions::new().with_heading_level(9).heading_level, 6);
        assert_eq!(RenderOptions::new().with_heading_level(0).heading_level, 1);
    }
}
