//! Rendering options.

/// Substitution point in the page separator template, replaced by the
/// 1-based page number.
const PAGE_TOKEN: &str = "{n}";

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page separator template; `{n}` becomes the 1-based page number
    pub page_separator: String,

    /// Maximum heading level (1-6)
    pub max_heading_level: u8,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page separator template.
    pub fn with_page_separator(mut self, template: impl Into<String>) -> Self {
        self.page_separator = template.into();
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }

    /// Instantiate the separator for a page number.
    pub(crate) fn format_separator(&self, page_number: u32) -> String {
        self.page_separator
            .replace(PAGE_TOKEN, &page_number.to_string())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_separator: "<!-- Page {n} -->".to_string(),
            max_heading_level: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = RenderOptions::new()
            .with_page_separator("== page {n} ==")
            .with_max_heading(3);

        assert_eq!(options.format_separator(7), "== page 7 ==");
        assert_eq!(options.max_heading_level, 3);
    }

    #[test]
    fn test_max_heading_is_clamped() {
        assert_eq!(RenderOptions::new().with_max_heading(0).max_heading_level, 1);
        assert_eq!(RenderOptions::new().with_max_heading(9).max_heading_level, 6);
    }

    #[test]
    fn test_default_separator() {
        let options = RenderOptions::default();
        assert_eq!(options.format_separator(1), "<!-- Page 1 -->");
    }
}
