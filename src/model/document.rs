//! Document-level types and the reader seam.

use serde::{Deserialize, Serialize};

use super::{Block, Page};
use crate::error::{Error, Result};

/// Access to a paginated document as supplied by an external reader.
///
/// chapterize never reads binary document formats itself. Any
/// extractor that can produce blocks, lines, and sized spans drives
/// the full pipeline through this trait; the bundled [`Document`]
/// model is the in-memory reference implementation.
pub trait PageSource {
    /// Total number of pages.
    fn page_count(&self) -> usize;

    /// Blocks of the page at `index` (0-based).
    ///
    /// Called once per pass, so a streaming reader may re-extract the
    /// page each time rather than caching.
    fn blocks(&self, index: usize) -> Result<Vec<Block>>;

    /// Embedded outline entries in reading order; may be empty.
    fn embedded_outline(&self) -> Vec<OutlineEntry>;
}

/// A flat embedded-outline entry as yielded by the reader.
///
/// Depths start at 1 for top-level entries; the page number is raw
/// (1-based, before any offset correction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Nesting depth, 1 at the top level
    pub depth: u32,

    /// Entry title
    pub title: String,

    /// Declared page number (1-based, uncorrected)
    pub page: i64,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(depth: u32, title: impl Into<String>, page: i64) -> Self {
        Self {
            depth,
            title: title.into(),
            page,
        }
    }
}

/// An in-memory structured document.
///
/// This is the interchange form consumed by the CLI (as JSON produced
/// by any extractor honoring the reader contract) and the natural
/// fixture type for tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document title, if the reader knows one
    #[serde(default)]
    pub title: Option<String>,

    /// Pages in document order
    pub pages: Vec<Page>,

    /// Embedded outline entries (may be empty)
    #[serde(default)]
    pub outline: Vec<OutlineEntry>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Parse a document from its JSON interchange form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl PageSource for Document {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn blocks(&self, index: usize) -> Result<Vec<Block>> {
        self.pages
            .get(index)
            .map(|page| page.blocks.clone())
            .ok_or(Error::PageOutOfRange(index, self.pages.len()))
    }

    fn embedded_outline(&self) -> Vec<OutlineEntry> {
        self.outline.clone()
    }
}
