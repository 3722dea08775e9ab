//! Error types for bioscrape.
//!
//! Extraction strategies never fail: a strategy that finds nothing simply
//! yields no candidate. The only error reaching the caller is a document
//! that cannot be processed at all.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input was empty or did not parse into a document.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
