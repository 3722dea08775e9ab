//! # bioscrape
//!
//! Biographical field extraction from semi-structured profile pages.
//!
//! A profile page describes one subject, but its layout is inconsistent:
//! some facts sit in embedded JSON-LD, some in `Label: value` lines, some in
//! bold-labelled prose, and some only in a commented-out block. This library
//! runs a fixed cascade of extraction strategies per field, keeps the first
//! usable value, normalizes dates and quantities, and fills anything left
//! unresolved with [`NOT_FOUND`].
//!
//! ## Quick Start
//!
//! ```rust
//! use bioscrape::{extract_with_options, Options};
//! use chrono::NaiveDate;
//!
//! let html = r#"<html><body>
//!   <h1>Jane Roe</h1>
//!   <div id="meta">
//!     <p>Born: 5 February 1985</p>
//!     <p>Height: 172cm</p>
//!   </div>
//! </body></html>"#;
//!
//! let options = Options {
//!     today: NaiveDate::from_ymd_opt(2024, 6, 1),
//!     ..Options::default()
//! };
//! let result = extract_with_options(html, &options)?;
//! assert_eq!(result.record.name, "Jane Roe");
//! assert_eq!(result.record.dob, "1985-02-05");
//! assert_eq!(result.record.age, "39");
//! assert_eq!(result.record.contract_until, bioscrape::NOT_FOUND);
//! # Ok::<(), bioscrape::Error>(())
//! ```
//!
//! ## Fields
//!
//! `name, dob, age, height, weight, nationality, position, preferred_foot,
//! birthplace, debut, contract_until`. Every field is always present.
//! [`ExtractResult::sources`] records which strategy produced each one.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Date and quantity normalization.
pub mod normalize;

/// Biographical fragment discovery, including commented-out blocks.
pub mod fragment;

/// JSON-LD, heading and `itemprop` lookups.
pub mod metadata;

/// Text-based field extraction strategies.
pub mod extractor;

/// Per-field strategy cascades and record assembly.
pub mod resolve;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Layout diagnostics for pages that stop resolving.
pub mod diagnostics;

// Public API - re-exports
pub use error::{Error, Result};
pub use fragment::DiscoveryMethod;
pub use options::Options;
pub use result::{ExtractResult, Field, Source, SubjectRecord, NOT_FOUND};

/// Extracts the subject record from an HTML document using default options.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for blank input.
///
/// # Example
///
/// ```rust
/// use bioscrape::extract;
///
/// let result = extract("<html><body><h1>Jane Roe</h1></body></html>")?;
/// assert_eq!(result.record.name, "Jane Roe");
/// # Ok::<(), bioscrape::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts the subject record from an HTML document with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for blank input.
///
/// # Example
///
/// ```rust
/// use bioscrape::{extract_with_options, Options};
///
/// let html = "<html><body><h1>Jane Roe</h1></body></html>";
/// let options = Options {
///     source_id: Some("https://example.com/players/jane-roe".to_string()),
///     use_document_fallback: false,
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.row().last().copied(), Some("https://example.com/players/jane-roe"));
/// # Ok::<(), bioscrape::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_content(html, options)
}

/// Extracts the subject record from HTML bytes with automatic encoding
/// detection.
///
/// The encoding comes from a byte-order mark, `<meta charset="...">` or
/// `<meta http-equiv="Content-Type" content="...; charset=...">`, and
/// defaults to UTF-8. Invalid characters are replaced with U+FFFD rather
/// than causing errors.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for blank input.
///
/// # Example
///
/// ```rust
/// use bioscrape::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><h1>Jos\xE9 Roe</h1></body></html>";
/// let result = extract_bytes(html)?;
/// assert_eq!(result.record.name, "José Roe");
/// # Ok::<(), bioscrape::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts the subject record from HTML bytes with custom options and
/// automatic encoding detection.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for blank input.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}

/// Extracts the subject record from a document the caller already parsed.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when the document has no `html` element.
pub fn extract_document(doc: &dom::Document, options: &Options) -> Result<ExtractResult> {
    extract::extract_from_document(doc, options)
}
