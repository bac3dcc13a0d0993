//! Document data model and the reader interface.

mod document;
mod page;

pub use document::{Document, OutlineEntry, PageSource};
pub use page::{size_key, Block, Line, Page, SizeKey, Span};
