//! Two-pass font-size classification.
//!
//! Heading detection is relative to the dominant body size of the
//! sampled pages, which is only known after the whole sample has been
//! scanned. The histogram is therefore built in a first pass and
//! distilled into an immutable [`HeadingLevels`] model that the
//! renderer receives by value; nothing here is shared or ambient.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{Block, PageSource, SizeKey};

/// Character counts per rounded font size across a page sample.
///
/// Built once per conversion job and never mutated afterward.
#[derive(Debug, Clone, Default)]
pub struct FontHistogram {
    counts: HashMap<SizeKey, usize>,
}

impl FontHistogram {
    /// Scan the given pages and accumulate per-size character counts.
    ///
    /// Every span of every text block contributes the character length
    /// of its trimmed text; whitespace-only spans and non-text blocks
    /// contribute nothing.
    pub fn observe<S: PageSource + ?Sized>(source: &S, page_indices: &[usize]) -> Result<Self> {
        let mut histogram = FontHistogram::default();
        for &index in page_indices {
            for block in source.blocks(index)? {
                let Block::Text { lines } = block else {
                    continue;
                };
                for line in &lines {
                    for span in &line.spans {
                        let trimmed = span.text.trim();
                        if !trimmed.is_empty() {
                            *histogram.counts.entry(span.size_key()).or_insert(0) +=
                                trimmed.chars().count();
                        }
                    }
                }
            }
        }
        Ok(histogram)
    }

    /// Check if no text was observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Accumulated character count for a size key.
    pub fn count(&self, key: SizeKey) -> usize {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// All observed size keys, in no particular order.
    pub fn sizes(&self) -> impl Iterator<Item = SizeKey> + '_ {
        self.counts.keys().copied()
    }

    /// The dominant (body text) size key.
    ///
    /// The bucket with the highest character count wins; ties break
    /// toward the smaller size, so the result is deterministic
    /// regardless of map iteration order.
    pub fn body_size_key(&self) -> Result<SizeKey> {
        self.counts
            .iter()
            .max_by(|(key_a, count_a), (key_b, count_b)| {
                count_a.cmp(count_b).then(key_b.cmp(key_a))
            })
            .map(|(key, _)| *key)
            .ok_or(Error::NoTextExtracted)
    }
}

/// Mapping from font size to heading level 1..=6.
///
/// Only sizes strictly greater than the body size are headings; they
/// are ranked descending, largest = level 1, and every size beyond the
/// sixth largest collapses to level 6. The body size itself is never
/// in the map.
#[derive(Debug, Clone, Default)]
pub struct HeadingLevels {
    levels: HashMap<SizeKey, u8>,
    body: SizeKey,
}

impl HeadingLevels {
    /// Build the size-to-level mapping from a histogram and body size.
    pub fn from_histogram(histogram: &FontHistogram, body: SizeKey) -> Self {
        let mut sizes: Vec<SizeKey> = histogram.sizes().filter(|&key| key > body).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));

        let levels = sizes
            .iter()
            .enumerate()
            .map(|(rank, &key)| (key, (rank + 1).min(6) as u8))
            .collect();

        Self { levels, body }
    }

    /// The body text size key this model was derived from.
    pub fn body_size_key(&self) -> SizeKey {
        self.body
    }

    /// Heading level for a size key, or `None` for body text.
    pub fn level_for(&self, key: SizeKey) -> Option<u8> {
        self.levels.get(&key).copied()
    }

    /// Number of distinct heading sizes.
    pub fn heading_count(&self) -> usize {
        self.levels.len()
    }

    /// Distinct heading size keys, largest first.
    pub fn heading_sizes(&self) -> Vec<SizeKey> {
        let mut sizes: Vec<SizeKey> = self.levels.keys().copied().collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }
}

/// Build the classifier model for a page sample in one call.
///
/// Fails with [`Error::NoTextExtracted`] when the sample holds no text.
pub fn classify<S: PageSource + ?Sized>(
    source: &S,
    page_indices: &[usize],
) -> Result<HeadingLevels> {
    let histogram = FontHistogram::observe(source, page_indices)?;
    let body = histogram.body_size_key()?;
    Ok(HeadingLevels::from_histogram(&histogram, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Document, Line, Page};

    fn histogram_of(entries: &[(f32, usize)]) -> FontHistogram {
        // Synthesize via a one-page document: one line per entry with
        // the requested character count at the requested size.
        let mut page = Page::new(1);
        let lines = entries
            .iter()
            .map(|&(size, chars)| Line::from_text("x".repeat(chars), size))
            .collect();
        page.add_block(Block::text(lines));
        let mut doc = Document::new();
        doc.add_page(page);
        FontHistogram::observe(&doc, &[0]).unwrap()
    }

    #[test]
    fn test_body_size_is_dominant_bucket() {
        let hist = histogram_of(&[(10.0, 500), (16.0, 20), (24.0, 5)]);
        assert_eq!(hist.body_size_key().unwrap(), 100);
        assert_eq!(hist.count(100), 500);
        assert_eq!(hist.count(160), 20);
    }

    #[test]
    fn test_body_size_tie_breaks_to_smaller() {
        let hist = histogram_of(&[(12.0, 40), (10.5, 40), (9.0, 10)]);
        assert_eq!(hist.body_size_key().unwrap(), 105);
    }

    #[test]
    fn test_level_map_scenario() {
        let hist = histogram_of(&[(10.0, 500), (16.0, 20), (24.0, 5)]);
        let levels = HeadingLevels::from_histogram(&hist, 100);

        assert_eq!(levels.level_for(240), Some(1));
        assert_eq!(levels.level_for(160), Some(2));
        assert_eq!(levels.level_for(100), None);
        assert_eq!(levels.level_for(80), None);
        assert_eq!(levels.heading_count(), 2);
        assert_eq!(levels.heading_sizes(), vec![240, 160]);
    }

    #[test]
    fn test_levels_cap_at_six() {
        let entries: Vec<(f32, usize)> = (0..9)
            .map(|i| (12.0 + i as f32, 5))
            .chain(std::iter::once((10.0, 100)))
            .collect();
        let hist = histogram_of(&entries);
        let body = hist.body_size_key().unwrap();
        assert_eq!(body, 100);

        let levels = HeadingLevels::from_histogram(&hist, body);
        assert_eq!(levels.level_for(200), Some(1));
        assert_eq!(levels.level_for(190), Some(2));
        assert_eq!(levels.level_for(150), Some(6));
        // Everything beyond the sixth largest collapses to 6.
        assert_eq!(levels.level_for(140), Some(6));
        assert_eq!(levels.level_for(130), Some(6));
        assert_eq!(levels.level_for(120), Some(6));
    }

    #[test]
    fn test_blank_spans_and_non_text_blocks_ignored() {
        let mut page = Page::new(1);
        page.add_block(Block::text(vec![Line::from_text("   ", 30.0)]));
        page.add_block(Block::Image { name: None });
        page.add_block(Block::text(vec![Line::from_text("ab", 10.0)]));
        let mut doc = Document::new();
        doc.add_page(page);

        let hist = FontHistogram::observe(&doc, &[0]).unwrap();
        assert_eq!(hist.count(300), 0);
        assert_eq!(hist.count(100), 2);
    }

    #[test]
    fn test_empty_sample_is_no_text() {
        let mut doc = Document::new();
        doc.add_page(Page::new(1));
        assert!(matches!(classify(&doc, &[0]), Err(Error::NoTextExtracted)));
    }
}
