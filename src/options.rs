//! Configuration options for field extraction.
//!
//! The `Options` struct controls the parts of resolution that are not a pure
//! function of the document: the reference date used for age, the source
//! identifier carried into the result, and the two degraded search paths.

use chrono::NaiveDate;

/// Configuration options for field extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use bioscrape::Options;
/// use chrono::NaiveDate;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Pin the reference date so ages are reproducible
/// let options = Options {
///     today: NaiveDate::from_ymd_opt(2024, 6, 1),
///     source_id: Some("https://example.com/players/1".to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Reference date for age computation.
    ///
    /// When `None`, the local calendar date at extraction time is used.
    ///
    /// Default: `None`
    pub today: Option<NaiveDate>,

    /// Identifier of the document being processed, usually its URL.
    ///
    /// Carried verbatim into `ExtractResult::source_id` and emitted as the
    /// trailing `source_url` column of the tabular row.
    ///
    /// Default: `None`
    pub source_id: Option<String>,

    /// Look for the biographical block inside HTML comments when no element
    /// with `id="meta"` exists.
    ///
    /// Default: `true`
    pub use_comment_fallback: bool,

    /// Search the whole rendered document text for contract and debut values
    /// when no earlier strategy resolved them.
    ///
    /// Default: `true`
    pub use_document_fallback: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            today: None,
            source_id: None,
            use_comment_fallback: true,
            use_document_fallback: true,
        }
    }
}

impl Options {
    /// Reference date for age computation.
    #[must_use]
    pub fn reference_date(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
