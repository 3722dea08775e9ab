//! Direct element lookups.
//!
//! The subject's name comes from the primary heading. Microdata
//! `span[itemprop]` elements are the last resort for height, weight,
//! nationality and birthplace.

use dom_query::Document;

use crate::dom;

/// Text of the first `<h1>`, whitespace-collapsed.
#[must_use]
pub fn primary_heading(doc: &Document) -> Option<String> {
    let h1 = doc.select("h1");
    if h1.is_empty() {
        return None;
    }
    let text = dom::normalized_text(&h1.first());
    if text.is_empty() { None } else { Some(text) }
}

/// Trimmed text of the first `span[itemprop="<prop>"]`.
#[must_use]
pub fn itemprop_text(doc: &Document, prop: &str) -> Option<String> {
    let span = doc.select(&format!(r#"span[itemprop="{prop}"]"#));
    if span.is_empty() {
        return None;
    }
    Some(span.first().text().trim().to_string())
}
