//! Field extraction strategies.
//!
//! Each strategy reads the document (or the located fragment) and returns
//! raw candidate values; none of them decides precedence. That is the job
//! of [`crate::resolve`].
//!
//! # Module Structure
//!
//! - `label_values`: line-by-line `Label: value` scan of the fragment
//! - `fields`: bold-label heuristics for born section, position and foot
//! - `contract`: contract-expiry patterns
//! - `debut`: debut-date patterns

use serde_json::Value;

use crate::normalize::collapse_quantity;
use crate::result::NOT_FOUND;

pub mod contract;
pub mod debut;
pub mod fields;
pub mod label_values;

pub use contract::{extract_contract, extract_contract_whole_text};
pub use debut::{extract_debut, extract_debut_whole_text};
pub use fields::{extract_born_section, extract_position, extract_preferred_foot, BornSection};
pub use label_values::{extract_label_values, LabelValues};

/// A raw value produced by a strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    /// Plain text.
    Text(String),
    /// A JSON quantity that could not be reduced to text yet.
    Quantity(Value),
}

impl Candidate {
    /// Whether the candidate can win a field.
    ///
    /// Empty text, a bare `:` and the sentinel itself never win.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        match self {
            Candidate::Text(s) => is_usable_text(s),
            Candidate::Quantity(v) => !v.is_null(),
        }
    }

    /// Final string form of the candidate.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Candidate::Text(s) => s,
            Candidate::Quantity(v) => collapse_quantity(&v),
        }
    }
}

impl From<String> for Candidate {
    fn from(s: String) -> Self {
        Candidate::Text(s)
    }
}

/// Whether `text` counts as a resolved value.
#[must_use]
pub fn is_usable_text(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && text != ":" && text != NOT_FOUND
}
