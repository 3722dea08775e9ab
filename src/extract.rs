//! Document-level entry points.
//!
//! Validates the input, parses it and hands the document to the resolution
//! engine.

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::resolve;
use crate::result::ExtractResult;

/// Main entry point for string input.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractResult> {
    if html.trim().is_empty() {
        return Err(Error::InvalidInput("empty document".to_string()));
    }

    tracing::debug!(len = html.len(), source_id = ?options.source_id, "extracting subject record");
    let document = dom::parse(html);
    extract_from_document(&document, options)
}

/// Resolve an already parsed document.
pub(crate) fn extract_from_document(doc: &Document, options: &Options) -> Result<ExtractResult> {
    if !doc.select("html").exists() {
        return Err(Error::InvalidInput("document has no html element".to_string()));
    }

    let result = resolve::resolve(doc, options);
    tracing::debug!(
        found = result.record.iter().filter(|(f, _)| result.record.is_found(*f)).count(),
        discovery = ?result.discovery,
        "extraction complete"
    );
    Ok(result)
}
