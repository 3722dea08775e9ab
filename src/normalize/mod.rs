//! Normalization of raw extracted values.
//!
//! Dates become ISO `YYYY-MM-DD` strings and quantities become single
//! display strings. Normalizers never fail loudly: a value they cannot
//! interpret yields `None` and the caller keeps the raw text.

pub mod date;
pub mod quantity;

pub use date::{age_from_text, compute_age, iso_if_exact, iso_or_raw, parse_date, parse_exact_date, to_iso};
pub use quantity::{collapse_quantity, normalize_quantity};
