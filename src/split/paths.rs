//! Relative path construction for chapter output.
//!
//! Path building is the one order-dependent step of the pipeline: each
//! chapter's location depends on the ancestors and siblings processed
//! before it. The state lives in an explicit accumulator folded over
//! the ordered chapter sequence, built fresh per conversion job and
//! discarded afterward — it must never be shared across jobs.

use std::collections::{BTreeMap, HashMap};

use super::Chapter;

/// Placeholder used when sanitization leaves nothing of a name.
const FALLBACK_NAME: &str = "untitled";

/// Characters stripped from output file names.
const ILLEGAL_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

const MAX_NAME_CHARS: usize = 80;

/// Accumulator threaded through one path-building run.
#[derive(Debug, Default)]
struct PathContext {
    /// Sanitized ancestor name per depth
    components: BTreeMap<u32, String>,

    /// Next sibling sequence number per parent path
    sibling_counts: HashMap<String, u32>,
}

impl PathContext {
    /// Compute the relative path for the next chapter in order.
    fn push(&mut self, chapter: &Chapter) -> String {
        let depth = chapter.depth;

        // A new item at depth D closes every branch at D or deeper.
        self.components.retain(|&d, _| d < depth);

        // Ancestor components joined in ascending depth order.
        let parent = self
            .components
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("/");

        let counter = self.sibling_counts.entry(parent.clone()).or_insert(0);
        *counter += 1;
        let sequence = *counter;

        let name = sanitize_name(&chapter.name);
        let file_name = format!("{sequence:02}_{name}");

        let path = if parent.is_empty() {
            file_name
        } else {
            format!("{parent}/{file_name}")
        };

        self.components.insert(depth, name);
        path
    }
}

/// Assign a relative output path (without extension) to every chapter,
/// preserving order.
pub fn build_paths(chapters: &[Chapter]) -> Vec<(Chapter, String)> {
    let mut context = PathContext::default();
    chapters
        .iter()
        .map(|chapter| (chapter.clone(), context.push(chapter)))
        .collect()
}

/// Make a section name safe to use as a file name.
///
/// Strips path-illegal characters, collapses whitespace runs to a
/// single underscore, and truncates to 80 characters. An empty result
/// falls back to a constant placeholder.
pub fn sanitize_name(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| !ILLEGAL_CHARS.contains(c))
        .collect();
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join("_");
    let truncated: String = collapsed.chars().take(MAX_NAME_CHARS).collect();

    if truncated.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        truncated
    }
}
