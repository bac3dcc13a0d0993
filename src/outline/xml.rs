//! Bookmark XML parsing.
//!
//! The interchange format is a tree of `ITEM` elements, each carrying
//! `name` and `page` attributes, under an arbitrary root element:
//!
//! ```xml
//! <BOOKMARKS>
//!   <ITEM name="Chapter 1" page="1">
//!     <ITEM name="Section 1.1" page="3"/>
//!   </ITEM>
//! </BOOKMARKS>
//! ```
//!
//! Element nesting becomes outline depth. Validation of the attribute
//! values happens later, in [`super::normalize_tree`].

use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::BookmarkNode;
use crate::error::{Error, Result};

const ITEM_TAG: &[u8] = b"ITEM";

/// Parse bookmark XML into a tree of raw nodes.
///
/// Fails with [`Error::InvalidOutline`] on malformed XML.
pub fn parse_bookmark_xml(xml: &str) -> Result<Vec<BookmarkNode>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut roots: Vec<BookmarkNode> = Vec::new();
    let mut stack: Vec<BookmarkNode> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == ITEM_TAG => {
                stack.push(node_from(&e)?);
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == ITEM_TAG => {
                let node = node_from(&e)?;
                attach(&mut roots, &mut stack, node);
            }
            Ok(Event::End(e)) if e.name().as_ref() == ITEM_TAG => {
                if let Some(node) = stack.pop() {
                    attach(&mut roots, &mut stack, node);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(Error::InvalidOutline(format!("malformed bookmark XML: {e}")));
            }
        }
    }

    if !stack.is_empty() {
        return Err(Error::InvalidOutline(
            "malformed bookmark XML: unclosed ITEM element".to_string(),
        ));
    }

    Ok(roots)
}

fn node_from(element: &BytesStart<'_>) -> Result<BookmarkNode> {
    let mut node = BookmarkNode::default();

    for attr in element.attributes() {
        let attr = attr
            .map_err(|e| Error::InvalidOutline(format!("malformed bookmark XML: {e}")))?;
        let value = attr
            .unescape_value()
            .map_err(|e| Error::InvalidOutline(format!("malformed bookmark XML: {e}")))?
            .into_owned();
        match attr.key.as_ref() {
            b"name" => node.name = value,
            b"page" => node.page = Some(value),
            _ => {}
        }
    }

    Ok(node)
}

fn attach(roots: &mut Vec<BookmarkNode>, stack: &mut [BookmarkNode], node: BookmarkNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else {
        roots.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_items() {
        let xml = r#"<BOOKMARKS>
            <ITEM name="Intro" page="1"/>
            <ITEM name="Chapter 1" page="3">
                <ITEM name="Section 1.1" page="3"/>
                <ITEM name="Section 1.2" page="7"/>
            </ITEM>
        </BOOKMARKS>"#;

        let roots = parse_bookmark_xml(xml).unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0], BookmarkNode::new("Intro", "1"));
        assert_eq!(roots[1].name, "Chapter 1");
        assert_eq!(roots[1].children.len(), 2);
        assert_eq!(roots[1].children[1], BookmarkNode::new("Section 1.2", "7"));
    }

    #[test]
    fn test_parse_missing_attributes() {
        let xml = r#"<root><ITEM name="No Page"><ITEM page="5"/></ITEM></root>"#;
        let roots = parse_bookmark_xml(xml).unwrap();
        assert_eq!(roots[0].page, None);
        assert_eq!(roots[0].children[0].name, "");
        assert_eq!(roots[0].children[0].page.as_deref(), Some("5"));
    }

    #[test]
    fn test_parse_unescapes_entities() {
        let xml = r#"<r><ITEM name="Q &amp; A" page="2"/></r>"#;
        let roots = parse_bookmark_xml(xml).unwrap();
        assert_eq!(roots[0].name, "Q & A");
    }

    #[test]
    fn test_parse_rejects_malformed_xml() {
        assert!(matches!(
            parse_bookmark_xml("<BOOKMARKS><ITEM name='x' page='1'>"),
            Err(Error::InvalidOutline(_))
        ));
    }

    #[test]
    fn test_parse_ignores_foreign_elements() {
        let xml = r#"<r><meta>junk</meta><ITEM name="A" page="1"/></r>"#;
        let roots = parse_bookmark_xml(xml).unwrap();
        assert_eq!(roots.len(), 1);
    }
}
