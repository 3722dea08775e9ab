//! Biographical fragment discovery.
//!
//! Profile pages keep the info block in an element with `id="meta"`. Some
//! render paths ship the same block commented out, so when no such element
//! exists the comments are searched and the first promising one is parsed
//! as a document of its own.

use std::fmt;

use serde::Serialize;

use crate::dom::{self, Document, Selection};

/// Substrings that mark a comment as carrying the info block.
const COMMENT_MARKERS: &[&str] = &[r#"id="meta""#, "data-birth", "itemprop", "Born"];

/// How the fragment was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryMethod {
    /// An element with `id="meta"` in the document.
    MetaId,
    /// The text of an HTML comment, re-parsed.
    MetaInComment,
}

impl DiscoveryMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DiscoveryMethod::MetaId => "meta_id",
            DiscoveryMethod::MetaInComment => "meta_in_comment",
        }
    }
}

impl fmt::Display for DiscoveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The sub-document believed to hold the biographical block.
pub enum Fragment<'a> {
    /// An element of the parsed page.
    Element(Selection<'a>),
    /// A separate document parsed from comment text.
    Reparsed(Document),
}

impl Fragment<'_> {
    /// Selection covering the whole fragment.
    #[must_use]
    pub fn selection(&self) -> Selection<'_> {
        match self {
            Fragment::Element(sel) => sel.clone(),
            Fragment::Reparsed(doc) => dom::document_root(doc),
        }
    }
}

impl fmt::Debug for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Element(sel) => f.debug_tuple("Element").field(&sel.html().to_string()).finish(),
            Fragment::Reparsed(doc) => f.debug_tuple("Reparsed").field(&doc.html().to_string()).finish(),
        }
    }
}

/// A located fragment and how it was found.
#[derive(Debug)]
pub struct LocatedFragment<'a> {
    pub fragment: Fragment<'a>,
    pub method: DiscoveryMethod,
}

/// Find the biographical fragment.
///
/// Looks for `#meta` first, then (when `search_comments` is set) for a
/// comment carrying one of the known markers.
#[must_use]
pub fn locate(doc: &Document, search_comments: bool) -> Option<LocatedFragment<'_>> {
    let meta = doc.select("#meta");
    if meta.exists() {
        let first = meta.first();
        tracing::debug!(method = %DiscoveryMethod::MetaId, "located biographical fragment");
        return Some(LocatedFragment {
            fragment: Fragment::Element(first),
            method: DiscoveryMethod::MetaId,
        });
    }

    if !search_comments {
        return None;
    }

    let texts = dom::comment_texts(&dom::document_root(doc));
    let text = find_marked_comment(&texts)?;
    tracing::debug!(
        method = %DiscoveryMethod::MetaInComment,
        len = text.len(),
        "located biographical fragment"
    );
    Some(LocatedFragment {
        fragment: Fragment::Reparsed(parse_comment(text)),
        method: DiscoveryMethod::MetaInComment,
    })
}

/// First comment text carrying one of the info-block markers.
#[must_use]
pub fn find_marked_comment(texts: &[String]) -> Option<&str> {
    texts
        .iter()
        .find(|t| COMMENT_MARKERS.iter().any(|m| t.contains(m)))
        .map(String::as_str)
}

/// Parse comment text as a standalone document.
#[must_use]
pub fn parse_comment(text: &str) -> Document {
    dom::parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_element_is_preferred() {
        let html = r#"<body>
            <!-- <div id="meta"><p>Born: 1 January 1990</p></div> -->
            <div id="meta"><p>Height: 180cm</p></div>
        </body>"#;
        let doc = dom::parse(html);

        let located = locate(&doc, true);
        let Some(located) = located else {
            panic!("expected a fragment");
        };
        assert_eq!(located.method, DiscoveryMethod::MetaId);
        assert!(dom::spaced_text(&located.fragment.selection()).contains("180cm"));
    }

    #[test]
    fn test_commented_block_is_reparsed() {
        let html = r#"<body>
            <!-- tracking pixel -->
            <!-- <div id="meta"><p><strong>Born:</strong> <span>5 February 1985</span></p></div> -->
            <h1>Jane Roe</h1>
        </body>"#;
        let doc = dom::parse(html);

        let Some(located) = locate(&doc, true) else {
            panic!("expected a fragment");
        };
        assert_eq!(located.method, DiscoveryMethod::MetaInComment);
        assert_eq!(located.method.to_string(), "meta_in_comment");

        let sel = located.fragment.selection();
        assert!(sel.select("#meta").exists());
        assert_eq!(dom::spaced_text(&sel), "Born: 5 February 1985");
    }

    #[test]
    fn test_comment_search_can_be_disabled() {
        let doc = dom::parse(r#"<body><!-- <div id="meta">Born</div> --></body>"#);
        assert!(locate(&doc, false).is_none());
        assert!(locate(&doc, true).is_some());
    }

    #[test]
    fn test_no_fragment() {
        let doc = dom::parse("<body><!-- nothing here --><p>Plain page</p></body>");
        assert!(locate(&doc, true).is_none());
    }

    #[test]
    fn test_marker_match_is_case_sensitive_for_born() {
        let texts = vec!["born yesterday".to_string(), r#"<span data-birth="1990">x</span>"#.to_string()];
        assert_eq!(find_marked_comment(&texts), Some(texts[1].as_str()));
    }
}
