//! Outline-driven chapter splitting.
//!
//! The serial half (ranges, then paths — order dependent) runs first;
//! rendering then fans out per chapter, since each chapter's output
//! depends only on its own page range and precomputed path.

mod paths;
mod ranges;

pub use paths::{build_paths, sanitize_name};
pub use ranges::{compute_ranges, Chapter};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::PageSource;
use crate::outline::OutlineItem;
use crate::render::{render_document, RenderOptions};

/// One rendered chapter: relative output path (without extension) and
/// its Markdown content.
pub type ChapterOutput = (String, String);

/// Split a document into rendered chapters along its outline items.
///
/// Every chapter is an independent two-pass conversion over its own
/// page range, so heading levels are inferred per chapter rather than
/// globally. Chapters render in parallel; the result keeps path order.
///
/// A chapter whose pages hold no text yields an empty entry (with a
/// warning) instead of failing the whole batch.
pub fn split_by_outline<S>(
    source: &S,
    items: &[OutlineItem],
    options: &RenderOptions,
) -> Result<Vec<ChapterOutput>>
where
    S: PageSource + Sync,
{
    let chapters = compute_ranges(items, source.page_count());
    let assigned = build_paths(&chapters);

    assigned
        .par_iter()
        .map(|(chapter, path)| {
            let pages: Vec<usize> = (chapter.start_page..=chapter.end_page).collect();
            match render_document(source, &pages, options) {
                Ok(text) => Ok((path.clone(), text)),
                Err(Error::NoTextExtracted) => {
                    log::warn!(
                        "chapter {:?} (pages {}-{}) contains no text",
                        chapter.name,
                        chapter.start_page + 1,
                        chapter.end_page + 1
                    );
                    Ok((path.clone(), String::new()))
                }
                Err(e) => Err(e),
            }
        })
        .collect()
}
