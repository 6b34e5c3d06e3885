//! Output configuration types

/// Title printed before the listing.
pub const DEFAULT_TITLE: &str = "Project Overview";

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub title: String,
    /// Spaces of indentation per depth level.
    pub indent_width: usize,
}

impl OutputConfig {
    /// Leading whitespace for an entry at `depth`.
    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width * depth)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            indent_width: 2,
        }
    }
}
