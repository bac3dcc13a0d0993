//! # chapterize
//!
//! Heading inference and outline-driven chapter splitting for
//! paginated documents.
//!
//! chapterize takes a document as a sequence of typed text fragments
//! annotated with font size — supplied by any external reader through
//! the [`PageSource`] trait — and infers its logical structure: the
//! statistically dominant font size becomes body text, larger sizes
//! become heading levels 1-6, and consecutive plain lines merge into
//! paragraphs with a script-aware join. A flat, depth-tagged outline
//! (bookmark XML or the reader's embedded outline) then splits the
//! document into a tree of named chapter files with non-overlapping
//! page ranges.
//!
//! ## Quick Start
//!
//! ```
//! use chapterize::{render_document, Block, Document, Line, Page, RenderOptions};
//!
//! fn main() -> chapterize::Result<()> {
//!     let mut page = Page::new(1);
//!     page.add_block(Block::text(vec![
//!         Line::from_text("Getting Started", 18.0),
//!         Line::from_text("Body text follows the heading here.", 10.0),
//!     ]));
//!     let mut doc = Document::new();
//!     doc.add_page(page);
//!
//!     let markdown = render_document(&doc, &[], &RenderOptions::default())?;
//!     assert!(markdown.contains("# Getting Started"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two-pass classification**: body size and heading levels are
//!   derived from a font-size histogram over the whole page sample
//!   before any page renders
//! - **Script-aware paragraphs**: CJK-dominant text joins without
//!   word spaces
//! - **Outline splitting**: bookmark trees become non-overlapping page
//!   ranges with hierarchical, sequence-numbered file paths
//! - **Parallel rendering**: chapters render independently via Rayon
//! - **Archive output**: chapters pack into a zip of Markdown files

pub mod archive;
pub mod classify;
pub mod error;
pub mod model;
pub mod outline;
pub mod pages;
pub mod render;
pub mod split;

// Re-export commonly used types
pub use archive::{chapter_archive_bytes, write_chapter_archive};
pub use classify::{classify, FontHistogram, HeadingLevels};
pub use error::{Error, Result};
pub use model::{size_key, Block, Document, Line, OutlineEntry, Page, PageSource, SizeKey, Span};
pub use outline::{
    normalize_embedded, normalize_tree, parse_bookmark_xml, BookmarkNode, OutlineItem,
};
pub use pages::parse_page_ranges;
pub use render::{extract_title, render_document, MarkdownRenderer, RenderOptions};
pub use split::{
    build_paths, compute_ranges, sanitize_name, split_by_outline, Chapter, ChapterOutput,
};

/// Split a document along an external bookmark XML tree.
///
/// Parses and normalizes the bookmarks (with `page_offset` applied),
/// then renders one chapter per usable item.
pub fn split_with_bookmarks<S: PageSource + Sync>(
    source: &S,
    bookmark_xml: &str,
    page_offset: i64,
    options: &RenderOptions,
) -> Result<Vec<ChapterOutput>> {
    let nodes = parse_bookmark_xml(bookmark_xml)?;
    let items = normalize_tree(&nodes, source.page_count(), page_offset)?;
    split_by_outline(source, &items, options)
}

/// Split a document along its embedded outline.
pub fn split_with_embedded_outline<S: PageSource + Sync>(
    source: &S,
    page_offset: i64,
    options: &RenderOptions,
) -> Result<Vec<ChapterOutput>> {
    let entries = source.embedded_outline();
    let items = normalize_embedded(&entries, source.page_count(), page_offset)?;
    split_by_outline(source, &items, options)
}
