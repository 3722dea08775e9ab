//! Contract-expiry extraction.

use regex::Regex;

use crate::normalize::iso_or_raw;
use crate::patterns::{CONTRACT_EXPIRES, CONTRACT_EXPIRES_MONTH, CONTRACT_UNTIL};

/// Contract expiry from fragment text.
///
/// Patterns, first match wins: `Expires <date>` (ending at a period, `Via`
/// or end of text), `Contract until <date>` / `Contract: <date>`, then a bare
/// `Expires <Month> <year>`. The match is normalized to ISO when possible.
///
/// # Example
///
/// ```rust
/// use bioscrape::extractor::extract_contract;
///
/// let contract = extract_contract("Contract Expires June 2027 Via option.");
/// assert_eq!(contract.as_deref(), Some("2027-06-01"));
/// ```
#[must_use]
pub fn extract_contract(text: &str) -> Option<String> {
    first_match(&[&CONTRACT_EXPIRES, &CONTRACT_UNTIL, &CONTRACT_EXPIRES_MONTH], text)
}

/// Contract expiry from the whole document text.
///
/// Only the `Expires` and `Contract until` patterns are used.
#[must_use]
pub fn extract_contract_whole_text(text: &str) -> Option<String> {
    first_match(&[&CONTRACT_EXPIRES, &CONTRACT_UNTIL], text)
}

/// Capture of the first pattern that matches at all, normalized.
///
/// A pattern that matches with a blank capture still ends the search.
fn first_match(patterns: &[&Regex], text: &str) -> Option<String> {
    let caps = patterns.iter().find_map(|re| re.captures(text))?;
    let candidate = caps.get(1)?.as_str().trim();
    if candidate.is_empty() {
        return None;
    }
    Some(iso_or_raw(candidate))
}
