//! Error types for the chapterize library.

use std::io;
use thiserror::Error;

/// Result type alias for chapterize operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during structure inference and splitting.
///
/// Everything here signals malformed input rather than a transient
/// condition; none of these errors is worth retrying. Each variant
/// carries the context (item name, offending value, declared bound)
/// needed to produce a user-facing diagnostic without further lookups.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The font histogram came up empty after scanning every sampled
    /// page. Usually means a scanned or image-only source that would
    /// need OCR before any structure can be inferred.
    #[error("no text extracted: the source contains no text spans (scanned or image-only input?)")]
    NoTextExtracted,

    /// The outline source yielded zero usable items, or an item with a
    /// malformed or out-of-range page value.
    #[error("invalid outline: {0}")]
    InvalidOutline(String),

    /// Malformed or out-of-bounds page range specification.
    #[error("invalid page range: {0}")]
    InvalidPageRange(String),

    /// A requested page index is outside the document.
    #[error("page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(usize, usize),

    /// The document JSON could not be parsed into the page model.
    #[error("document parse error: {0}")]
    DocumentParse(String),

    /// Error writing the chapter archive.
    #[error("archive error: {0}")]
    Archive(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::DocumentParse(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Archive(err.to_string())
    }
}
