//! Machine-readable subject metadata.
//!
//! This module covers the sources that do not depend on the visible layout:
//! JSON-LD objects, the primary heading, and microdata `itemprop` spans.

pub mod itemprop;
pub mod json_ld;

pub use itemprop::{itemprop_text, primary_heading};
pub use json_ld::{extract_person, PersonSchema};
