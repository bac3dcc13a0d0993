//! Rendering: line reassembly and Markdown output.

mod markdown;
mod options;
mod script;

pub use markdown::{extract_title, render_document, MarkdownRenderer};
pub use options::RenderOptions;
