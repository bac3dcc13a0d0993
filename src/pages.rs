//! Page range specifications.
//!
//! Ranges use 1-based page numbers in the familiar `"1-5,8,10-12"`
//! form and resolve to 0-based page indices in the order written.
//! Duplicates are kept as given; a page listed twice is rendered twice.

use crate::error::{Error, Result};

/// Parse a page range specification against a document's page count.
///
/// Rejected before any other work begins: non-numeric parts, inverted
/// ranges, and pages outside `[1, total_pages]`.
pub fn parse_page_ranges(spec: &str, total_pages: usize) -> Result<Vec<usize>> {
    let mut pages = Vec::new();

    for part in spec.split(',') {
        let part = part.trim();
        if let Some((start_text, end_text)) = part.split_once('-') {
            let start: usize = parse_number(start_text, part)?;
            let end: usize = parse_number(end_text, part)?;
            if start < 1 || end > total_pages {
                return Err(Error::InvalidPageRange(format!(
                    "range {part:?} is out of bounds (document has {total_pages} pages)"
                )));
            }
            if start > end {
                return Err(Error::InvalidPageRange(format!(
                    "malformed range: {part:?}"
                )));
            }
            pages.extend(start - 1..end);
        } else {
            let number: usize = parse_number(part, part)?;
            if number < 1 || number > total_pages {
                return Err(Error::InvalidPageRange(format!(
                    "page {number} is out of bounds (document has {total_pages} pages)"
                )));
            }
            pages.push(number - 1);
        }
    }

    Ok(pages)
}

fn parse_number(text: &str, part: &str) -> Result<usize> {
    text.trim()
        .parse()
        .map_err(|_| Error::InvalidPageRange(format!("malformed page number in {part:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_spec() {
        let pages = parse_page_ranges("1-5,8,10-12", 20).unwrap();
        assert_eq!(pages, vec![0, 1, 2, 3, 4, 7, 9, 10, 11]);
    }

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        let pages = parse_page_ranges("3,1-2,3", 5).unwrap();
        assert_eq!(pages, vec![2, 0, 1, 2]);
    }

    #[test]
    fn test_parse_single_page() {
        assert_eq!(parse_page_ranges("4", 4).unwrap(), vec![3]);
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        assert!(matches!(
            parse_page_ranges("1-9", 5),
            Err(Error::InvalidPageRange(_))
        ));
        assert!(matches!(
            parse_page_ranges("0", 5),
            Err(Error::InvalidPageRange(_))
        ));
        assert!(matches!(
            parse_page_ranges("6", 5),
            Err(Error::InvalidPageRange(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_range() {
        assert!(matches!(
            parse_page_ranges("5-2", 10),
            Err(Error::InvalidPageRange(_))
        ));
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = parse_page_ranges("1-x", 10).unwrap_err();
        assert!(err.to_string().contains("1-x"));
        assert!(parse_page_ranges("abc", 10).is_err());
        assert!(parse_page_ranges("", 10).is_err());
    }
}
