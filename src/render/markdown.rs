//! Markdown rendering: line reassembly and page composition.
//!
//! Rendering is the second pass of the pipeline. It receives the
//! classifier model computed over the same page selection and turns
//! each page's blocks into Markdown: heading lines become `#` runs,
//! consecutive plain lines merge into paragraphs with a script-aware
//! join, and blocks separate with blank lines.

use regex::Regex;

use super::script::is_cjk_text;
use super::RenderOptions;
use crate::classify::{classify, HeadingLevels};
use crate::error::Result;
use crate::model::{Block, PageSource};

/// Renders pages to Markdown using a prepared classifier model.
pub struct MarkdownRenderer<'a> {
    levels: &'a HeadingLevels,
    options: &'a RenderOptions,
}

impl<'a> MarkdownRenderer<'a> {
    /// Create a renderer over a classifier model.
    pub fn new(levels: &'a HeadingLevels, options: &'a RenderOptions) -> Self {
        Self { levels, options }
    }

    /// Render one page's blocks to Markdown.
    ///
    /// A page without text renders as an empty string, never an error.
    pub fn render_page(&self, blocks: &[Block]) -> String {
        let mut page_parts: Vec<String> = Vec::new();

        for block in blocks {
            let Block::Text { lines } = block else {
                continue;
            };

            let mut block_parts: Vec<String> = Vec::new();
            let mut pending: Vec<String> = Vec::new();

            for line in lines {
                let text = line.merged_text();
                if text.is_empty() {
                    continue;
                }

                let level = line
                    .max_size_key()
                    .and_then(|key| self.levels.level_for(key));

                match level {
                    Some(level) => {
                        // A heading closes out any buffered paragraph first.
                        flush_paragraph(&mut block_parts, &mut pending);
                        let level = level.min(self.options.max_heading_level);
                        block_parts.push(format!("{} {}", "#".repeat(level as usize), text));
                    }
                    None => pending.push(text),
                }
            }

            flush_paragraph(&mut block_parts, &mut pending);

            if !block_parts.is_empty() {
                page_parts.push(block_parts.join("\n\n"));
            }
        }

        page_parts.join("\n\n")
    }
}

/// Merge buffered plain lines into one paragraph and append it.
///
/// CJK-dominant text joins without a separator; everything else gets a
/// single space between source lines.
fn flush_paragraph(block_parts: &mut Vec<String>, pending: &mut Vec<String>) {
    if pending.is_empty() {
        return;
    }
    let joined = pending.concat();
    let paragraph = if is_cjk_text(&joined) {
        joined
    } else {
        pending.join(" ")
    };
    block_parts.push(paragraph);
    pending.clear();
}

/// Render selected pages of a document to a single Markdown string.
///
/// Runs the full two-pass pipeline: font statistics over exactly the
/// selected pages, then per-page reassembly. Pages are prefixed with
/// the separator template (`{n}` = 1-based page number) and divided by
/// a horizontal rule. An empty `page_indices` selects every page.
///
/// Fails with [`crate::Error::NoTextExtracted`] when the selection
/// holds no text at all.
pub fn render_document<S: PageSource + ?Sized>(
    source: &S,
    page_indices: &[usize],
    options: &RenderOptions,
) -> Result<String> {
    let indices: Vec<usize> = if page_indices.is_empty() {
        (0..source.page_count()).collect()
    } else {
        page_indices.to_vec()
    };

    let levels = classify(source, &indices)?;
    let renderer = MarkdownRenderer::new(&levels, options);

    let mut sections = Vec::with_capacity(indices.len());
    for (position, &index) in indices.iter().enumerate() {
        let blocks = source.blocks(index)?;
        let content = renderer.render_page(&blocks);

        let mut parts: Vec<String> = Vec::new();
        if position > 0 {
            parts.push("---".to_string());
            parts.push(String::new());
        }
        parts.push(options.format_separator(index as u32 + 1));
        parts.push(String::new());
        if !content.is_empty() {
            parts.push(content);
        }
        sections.push(parts.join("\n"));
    }

    Ok(sections.join("\n\n") + "\n")
}

/// Extract the first level-1 heading from rendered Markdown.
pub fn extract_title(markdown: &str) -> Option<String> {
    let re = Regex::new(r"(?m)^# (.+)$").unwrap();
    re.captures(markdown)
        .map(|caps| caps[1].trim().to_string())
}
