//! Chapter page-range computation.

use crate::outline::OutlineItem;

/// A computed, non-overlapping page range derived from ordered outline
/// items. Pages are 0-based and inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// Section name from the outline
    pub name: String,

    /// First page of the range (0-based, inclusive)
    pub start_page: usize,

    /// Last page of the range (0-based, inclusive)
    pub end_page: usize,

    /// Outline depth, 1 at the top level
    pub depth: u32,
}

impl Chapter {
    /// Create a new chapter record.
    pub fn new(name: impl Into<String>, start_page: usize, end_page: usize, depth: u32) -> Self {
        Self {
            name: name.into(),
            start_page,
            end_page,
            depth,
        }
    }

    /// Number of pages covered by this chapter.
    pub fn page_count(&self) -> usize {
        self.end_page - self.start_page + 1
    }
}

/// Convert ordered outline items into contiguous page ranges.
///
/// Items are stably sorted by page (ties keep their original order).
/// Each chapter ends one page before the next item starts; the final
/// chapter runs to the end of the document. Two items on the same page
/// collapse the earlier one to a single-page chapter — accepted
/// degenerate output, never an error.
pub fn compute_ranges(items: &[OutlineItem], total_pages: usize) -> Vec<Chapter> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| item.page);

    let mut chapters = Vec::with_capacity(sorted.len());
    for (position, item) in sorted.iter().enumerate() {
        let start = item.page as usize - 1;
        let end = match sorted.get(position + 1) {
            Some(next) => {
                let before_next = (next.page as usize).saturating_sub(2);
                if before_next < start {
                    log::warn!(
                        "outline item {:?} shares page {} with the next item; \
                         emitting a single-page chapter",
                        item.name,
                        item.page
                    );
                }
                before_next.max(start)
            }
            None => total_pages.saturating_sub(1),
        };
        chapters.push(Chapter::new(item.name.clone(), start, end, item.depth));
    }
    chapters
}
