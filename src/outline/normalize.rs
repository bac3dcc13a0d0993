//! Outline validation and flattening.

use super::{BookmarkNode, OutlineItem};
use crate::error::{Error, Result};
use crate::model::OutlineEntry;

/// Flatten a bookmark tree into validated outline items.
///
/// Depth-first traversal assigns depth 1 to the root's direct children
/// and increments per nesting level. `page_offset` is added to every
/// declared page; the corrected page must land in `[1, total_pages]`.
///
/// A node with a blank name or a blank/missing page value is skipped,
/// but its children are still traversed at their original depth. A
/// non-numeric page value is an error naming the node. Zero usable
/// items overall is an error.
pub fn normalize_tree(
    nodes: &[BookmarkNode],
    total_pages: usize,
    page_offset: i64,
) -> Result<Vec<OutlineItem>> {
    let mut items = Vec::new();
    walk(nodes, 1, total_pages, page_offset, &mut items)?;

    if items.is_empty() {
        return Err(Error::InvalidOutline(
            "outline contains no usable items".to_string(),
        ));
    }
    Ok(items)
}

fn walk(
    nodes: &[BookmarkNode],
    depth: u32,
    total_pages: usize,
    page_offset: i64,
    items: &mut Vec<OutlineItem>,
) -> Result<()> {
    for node in nodes {
        let name = node.name.trim();
        let page_text = node.page.as_deref().map(str::trim).unwrap_or("");

        if !name.is_empty() && !page_text.is_empty() {
            let raw: i64 = page_text.parse().map_err(|_| {
                Error::InvalidOutline(format!(
                    "item {name:?} has a non-numeric page value {page_text:?}"
                ))
            })?;
            let page = checked_page(name, raw, total_pages, page_offset)?;
            items.push(OutlineItem::new(name, page, depth));
        }

        walk(&node.children, depth + 1, total_pages, page_offset, items)?;
    }
    Ok(())
}

/// Validate a reader-supplied embedded outline into outline items.
///
/// Entries with a blank title are skipped silently; pages get the same
/// offset correction and bounds check as the tree source. Zero usable
/// items is an error.
pub fn normalize_embedded(
    entries: &[OutlineEntry],
    total_pages: usize,
    page_offset: i64,
) -> Result<Vec<OutlineItem>> {
    let mut items = Vec::new();

    for entry in entries {
        let name = entry.title.trim();
        if name.is_empty() {
            continue;
        }
        let page = checked_page(name, entry.page, total_pages, page_offset)?;
        items.push(OutlineItem::new(name, page, entry.depth.max(1)));
    }

    if items.is_empty() {
        return Err(Error::InvalidOutline(
            "outline contains no usable items".to_string(),
        ));
    }
    Ok(items)
}

fn checked_page(name: &str, raw: i64, total_pages: usize, page_offset: i64) -> Result<u32> {
    let page = raw + page_offset;
    if page < 1 || page > total_pages as i64 {
        return Err(Error::InvalidOutline(format!(
            "item {name:?} resolves to page {page}, outside 1..={total_pages}"
        )));
    }
    Ok(page as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<BookmarkNode> {
        let mut chapter = BookmarkNode::new("Chapter 1", "3");
        chapter.add_child(BookmarkNode::new("Section 1.1", "3"));
        chapter.add_child(BookmarkNode::new("Section 1.2", "7"));
        vec![BookmarkNode::new("Intro", "1"), chapter]
    }

    #[test]
    fn test_normalize_tree_depths_and_order() {
        let items = normalize_tree(&tree(), 10, 0).unwrap();
        assert_eq!(
            items,
            vec![
                OutlineItem::new("Intro", 1, 1),
                OutlineItem::new("Chapter 1", 3, 1),
                OutlineItem::new("Section 1.1", 3, 2),
                OutlineItem::new("Section 1.2", 7, 2),
            ]
        );
    }

    #[test]
    fn test_normalize_tree_applies_offset() {
        let items = normalize_tree(&tree(), 20, 2).unwrap();
        assert_eq!(items[0].page, 3);
        assert_eq!(items[3].page, 9);
    }

    #[test]
    fn test_pageless_node_skipped_children_kept() {
        let mut part = BookmarkNode::container("Part I");
        part.add_child(BookmarkNode::new("Chapter 1", "2"));
        let items = normalize_tree(&[part], 10, 0).unwrap();

        assert_eq!(items, vec![OutlineItem::new("Chapter 1", 2, 2)]);
    }

    #[test]
    fn test_blank_name_skipped_children_kept() {
        let mut anon = BookmarkNode::new("   ", "1");
        anon.add_child(BookmarkNode::new("Inner", "2"));
        let items = normalize_tree(&[anon], 10, 0).unwrap();

        assert_eq!(items, vec![OutlineItem::new("Inner", 2, 2)]);
    }

    #[test]
    fn test_non_numeric_page_names_item() {
        let nodes = vec![BookmarkNode::new("Broken", "iv")];
        let err = normalize_tree(&nodes, 10, 0).unwrap_err();
        assert!(err.to_string().contains("Broken"));
        assert!(err.to_string().contains("iv"));
    }

    #[test]
    fn test_out_of_range_page_names_item() {
        let nodes = vec![BookmarkNode::new("Beyond", "11")];
        let err = normalize_tree(&nodes, 10, 0).unwrap_err();
        assert!(err.to_string().contains("Beyond"));

        // The offset can push an otherwise valid page below 1.
        let nodes = vec![BookmarkNode::new("Early", "1")];
        assert!(normalize_tree(&nodes, 10, -1).is_err());
    }

    #[test]
    fn test_empty_tree_is_error() {
        assert!(matches!(
            normalize_tree(&[], 10, 0),
            Err(Error::InvalidOutline(_))
        ));
        let nodes = vec![BookmarkNode::container("only container")];
        assert!(normalize_tree(&nodes, 10, 0).is_err());
    }

    #[test]
    fn test_normalize_embedded_skips_blank_titles() {
        let entries = vec![
            OutlineEntry::new(1, "Intro", 1),
            OutlineEntry::new(2, "  ", 2),
            OutlineEntry::new(2, "Details", 4),
        ];
        let items = normalize_embedded(&entries, 10, 0).unwrap();
        assert_eq!(
            items,
            vec![
                OutlineItem::new("Intro", 1, 1),
                OutlineItem::new("Details", 4, 2),
            ]
        );
    }

    #[test]
    fn test_normalize_embedded_validates_bounds() {
        let entries = vec![OutlineEntry::new(1, "Late", 9)];
        assert!(normalize_embedded(&entries, 10, 5).is_err());
        assert!(normalize_embedded(&[], 10, 0).is_err());
    }
}
