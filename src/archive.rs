//! Chapter archive output.
//!
//! Batch conversion packs one UTF-8 Markdown file per chapter into a
//! deflate-compressed zip, with directories implied by the relative
//! paths — no explicit directory entries are written.

use std::io::{Cursor, Seek, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::split::ChapterOutput;

/// Write rendered chapters into a zip archive, appending the `.md`
/// extension to every relative path. Returns the inner writer.
pub fn write_chapter_archive<W: Write + Seek>(
    chapters: &[ChapterOutput],
    writer: W,
) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (path, content) in chapters {
        zip.start_file(format!("{path}.md"), options)?;
        zip.write_all(content.as_bytes())?;
    }

    Ok(zip.finish()?)
}

/// Write rendered chapters into an in-memory zip and return its bytes.
pub fn chapter_archive_bytes(chapters: &[ChapterOutput]) -> Result<Vec<u8>> {
    let cursor = write_chapter_archive(chapters, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}
