//! Page-level types: spans, lines, and blocks.

use serde::{Deserialize, Serialize};

/// Deci-point font size key: the size in points rounded to one
/// fractional digit, stored as tenths.
///
/// All classification compares sizes after this rounding; integer keys
/// keep histogram buckets exact and hashable where raw `f32` sizes
/// would not be.
pub type SizeKey = i32;

/// Convert a font size in points to its deci-point key.
pub fn size_key(size: f32) -> SizeKey {
    (size * 10.0).round() as SizeKey
}

/// The smallest text unit carrying a font size.
///
/// Spans are produced by an external reader and never modified here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Text content of the span
    pub text: String,

    /// Font size in points
    pub size: f32,
}

impl Span {
    /// Create a new span.
    pub fn new(text: impl Into<String>, size: f32) -> Self {
        Self {
            text: text.into(),
            size,
        }
    }

    /// Deci-point size key used for classification.
    pub fn size_key(&self) -> SizeKey {
        size_key(self.size)
    }

    /// Check if the span holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// An ordered sequence of spans belonging to one visual line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Spans in reading order
    pub spans: Vec<Span>,
}

impl Line {
    /// Create a line from spans.
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Create a single-span line.
    pub fn from_text(text: impl Into<String>, size: f32) -> Self {
        Self {
            spans: vec![Span::new(text, size)],
        }
    }

    /// Merge span texts into one outer-trimmed string.
    ///
    /// Whitespace-only spans are dropped; the remaining span texts are
    /// concatenated without separators, preserving any spacing the
    /// reader put inside them.
    pub fn merged_text(&self) -> String {
        let mut merged = String::new();
        for span in &self.spans {
            if !span.is_blank() {
                merged.push_str(&span.text);
            }
        }
        merged.trim().to_string()
    }

    /// Largest size key among non-blank spans.
    ///
    /// The line's representative size for classification: a single
    /// larger fragment (an inline chapter number, say) dominates the
    /// whole line. `None` when every span is blank.
    pub fn max_size_key(&self) -> Option<SizeKey> {
        self.spans
            .iter()
            .filter(|s| !s.is_blank())
            .map(Span::size_key)
            .max()
    }
}

/// A content block on a page.
///
/// Only text blocks contribute to classification and output; every
/// other block type is skipped entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A block of text lines
    Text {
        /// Lines in source order
        lines: Vec<Line>,
    },

    /// An image placed by the reader (content not extracted)
    Image {
        /// Optional resource name from the reader
        name: Option<String>,
    },

    /// Any other non-text block type
    Other,
}

impl Block {
    /// Create a text block.
    pub fn text(lines: Vec<Line>) -> Self {
        Block::Text { lines }
    }

    /// Check if this block carries text lines.
    pub fn is_text(&self) -> bool {
        matches!(self, Block::Text { .. })
    }

    /// Lines of a text block, or `None` for any other block type.
    pub fn lines(&self) -> Option<&[Line]> {
        match self {
            Block::Text { lines } => Some(lines),
            _ => None,
        }
    }
}

/// A single page in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Content blocks on the page
    pub blocks: Vec<Block>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            blocks: Vec::new(),
        }
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the page has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_key_rounding() {
        assert_eq!(size_key(12.0), 120);
        assert_eq!(size_key(11.96), 120);
        assert_eq!(size_key(12.04), 120);
        assert_eq!(size_key(9.15), 92);
    }

    #[test]
    fn test_line_merged_text() {
        let line = Line::new(vec![
            Span::new("  Chapter ", 16.0),
            Span::new("   ", 16.0),
            Span::new("One ", 16.0),
        ]);
        // Blank middle span is dropped; the others concatenate as-is
        // and the result is outer-trimmed only.
        assert_eq!(line.merged_text(), "Chapter One");
    }

    #[test]
    fn test_line_max_size_ignores_blank_spans() {
        let line = Line::new(vec![
            Span::new("body", 10.0),
            Span::new("  ", 24.0),
            Span::new("emphasis", 14.0),
        ]);
        assert_eq!(line.max_size_key(), Some(140));

        let blank = Line::new(vec![Span::new("   ", 12.0)]);
        assert_eq!(blank.max_size_key(), None);
        assert_eq!(blank.merged_text(), "");
    }

    #[test]
    fn test_block_variants() {
        let text = Block::text(vec![Line::from_text("hello", 10.0)]);
        assert!(text.is_text());
        assert_eq!(text.lines().map(|lines| lines.len()), Some(1));

        let image = Block::Image { name: None };
        assert!(!image.is_text());
        assert!(image.lines().is_none());
    }
}
