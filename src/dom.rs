//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate covering what the extractors need:
//! rendering an element's text the way a reader sees it, reaching comment
//! nodes, and walking the document in source order.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

use dom_query::NodeData;

use crate::patterns::WHITESPACE_NORMALIZE;

/// Elements whose text is never rendered.
const HIDDEN_TEXT_TAGS: &[&str] = &["script", "style", "template"];

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Selection covering a whole document, including top-level comments.
#[must_use]
pub fn document_root(doc: &Document) -> Selection<'_> {
    Selection::from(doc.root())
}

// === Attributes and Names ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Lowercase tag name of a node, `None` for non-elements.
#[must_use]
pub fn node_tag(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

// === Text Rendering ===

/// Trimmed, non-empty text segments under `sel`, in document order.
///
/// One segment per text node. Text inside `script`, `style` and `template`
/// elements and comment contents are skipped.
#[must_use]
pub fn text_segments(sel: &Selection) -> Vec<String> {
    let mut segments = Vec::new();
    for root in sel.nodes() {
        for node in root.descendants() {
            if !node.is_text() || is_hidden(&node) {
                continue;
            }
            let text = node.text();
            let text = text.trim();
            if !text.is_empty() {
                segments.push(text.to_string());
            }
        }
    }
    segments
}

/// Text of `sel` with one segment per line.
#[must_use]
pub fn line_text(sel: &Selection) -> String {
    text_segments(sel).join("\n")
}

/// Text of `sel` with segments separated by single spaces.
#[must_use]
pub fn spaced_text(sel: &Selection) -> String {
    text_segments(sel).join(" ")
}

/// All text under `sel`, as the parser stores it.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// All text of `sel` with whitespace runs collapsed and ends trimmed.
#[must_use]
pub fn normalized_text(sel: &Selection) -> String {
    let text = text_content(sel);
    WHITESPACE_NORMALIZE.replace_all(&text, " ").trim().to_string()
}

fn is_hidden(node: &NodeRef) -> bool {
    node.ancestors(None)
        .into_iter()
        .any(|a| node_tag(&a).is_some_and(|t| HIDDEN_TEXT_TAGS.contains(&t.as_str())))
}

// === Comments ===

/// Trimmed text of every comment node under `sel`, in document order.
#[must_use]
pub fn comment_texts(sel: &Selection) -> Vec<String> {
    let mut texts = Vec::new();
    for root in sel.nodes() {
        for node in root.descendants() {
            let contents = node.query(|n| match &n.data {
                NodeData::Comment { contents } => Some(contents.to_string()),
                _ => None,
            });
            if let Some(Some(text)) = contents {
                texts.push(text.trim().to_string());
            }
        }
    }
    texts
}

// === Document Order ===

/// First element under `root` matching `selector` whose text contains
/// `needle` (case-insensitive).
///
/// The element's full text is compared, nested markup included, so a label
/// split like `<strong><span>Born</span>:</strong>` still matches.
#[must_use]
pub fn first_containing<'a>(root: &Selection<'a>, selector: &str, needle: &str) -> Option<Selection<'a>> {
    let needle = needle.to_lowercase();
    let candidates = root.select(selector);
    let found = candidates
        .nodes()
        .iter()
        .find(|node| node.text().to_lowercase().contains(&needle))
        .copied();
    found.map(Selection::from)
}

/// First element named `tag` that follows `after` in document order.
///
/// Elements nested inside `after` count as following it, so the search may
/// return one of its descendants.
#[must_use]
pub fn find_next<'a>(root: &Selection<'a>, after: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    let after_id = after.nodes().first()?.id;
    let mut passed = false;
    for top in root.nodes() {
        for node in top.descendants() {
            if !passed {
                passed = node.id == after_id;
                continue;
            }
            if node_tag(&node).is_some_and(|t| t == tag) {
                return Some(Selection::from(node));
            }
        }
    }
    None
}
