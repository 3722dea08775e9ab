//! JSON-LD subject parsing.
//!
//! Profile pages often embed a Schema.org `Person` (or `SportsPerson`,
//! `Player`, ...) object describing the subject. When present it is the
//! most trusted source for birth date, birthplace, height, weight,
//! nationality and position.

use dom_query::{Document, Selection};
use serde_json::{Map, Value};

use crate::dom;
use crate::extractor::Candidate;
use crate::normalize::normalize_quantity;
use crate::patterns::JSON_LD_SELECTOR;

/// Lowercase `@type` substrings that mark the subject object.
const SUBJECT_TYPE_MARKERS: &[&str] = &["person", "player", "sports"];

/// Subject fields read from a JSON-LD object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonSchema {
    /// `birthDate`, verbatim.
    pub birth_date: Option<String>,
    /// `birthPlace.name` or a plain `birthPlace` string.
    pub birth_place: Option<String>,
    /// `height`, normalized when possible.
    pub height: Option<Candidate>,
    /// `weight`, normalized when possible.
    pub weight: Option<Candidate>,
    /// `nationality`, or its `name` when it is an object.
    pub nationality: Option<String>,
    /// `roleName`, used as the position.
    pub role_name: Option<String>,
}

/// Extract the subject from the document's JSON-LD blocks.
///
/// Returns `None` when no block holds an object whose `@type` mentions a
/// person, player or sports type. Blocks that fail to parse are skipped.
#[must_use]
pub fn extract_person(doc: &Document) -> Option<PersonSchema> {
    let subject = find_subject(doc)?;
    Some(PersonSchema::from_object(&subject))
}

impl PersonSchema {
    #[must_use]
    pub fn from_object(data: &Map<String, Value>) -> Self {
        Self {
            birth_date: get_single_string_value(data, "birthDate"),
            birth_place: data.get("birthPlace").and_then(name_or_string),
            height: data.get("height").and_then(quantity_candidate),
            weight: data.get("weight").and_then(quantity_candidate),
            nationality: data.get("nationality").and_then(name_or_string),
            role_name: get_single_string_value(data, "roleName"),
        }
    }
}

/// First subject object across all JSON-LD scripts, in document order.
fn find_subject(doc: &Document) -> Option<Map<String, Value>> {
    for script in doc.select(JSON_LD_SELECTOR).nodes() {
        let script_sel = Selection::from(*script);
        let json_text = script_sel.text().trim().to_string();

        if json_text.is_empty() {
            continue;
        }

        let data: Value = match serde_json::from_str(&json_text) {
            Ok(v) => v,
            Err(err) => {
                tracing::trace!(%err, "skipping malformed JSON-LD block");
                continue;
            }
        };

        let found = match data {
            Value::Object(map) => is_subject(&map).then_some(map),
            Value::Array(items) => items.into_iter().find_map(|item| match item {
                Value::Object(map) if is_subject(&map) => Some(map),
                _ => None,
            }),
            _ => None,
        };

        if let Some(subject) = found {
            tracing::debug!(types = ?get_schema_types(&subject), "using JSON-LD subject");
            return Some(subject);
        }
    }
    None
}

fn is_subject(data: &Map<String, Value>) -> bool {
    get_schema_types(data)
        .iter()
        .any(|t| SUBJECT_TYPE_MARKERS.iter().any(|m| t.contains(m)))
}

/// Lowercased `@type` values from a schema object.
fn get_schema_types(data: &Map<String, Value>) -> Vec<String> {
    match data.get("@type") {
        Some(Value::String(s)) => vec![s.to_lowercase()],
        Some(Value::Array(arr)) => arr
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_lowercase)
            .collect(),
        _ => Vec::new(),
    }
}

/// Get a single string value from an object property.
fn get_single_string_value(data: &Map<String, Value>, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::String(s) => non_empty(s),
        Value::Array(arr) => arr.first().and_then(Value::as_str).and_then(non_empty),
        _ => None,
    }
}

/// A plain string, or the `name` of an object (first element for arrays).
fn name_or_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Object(obj) => obj.get("name").and_then(Value::as_str).and_then(non_empty),
        Value::Array(arr) => arr.first().and_then(name_or_string),
        _ => None,
    }
}

fn quantity_candidate(value: &Value) -> Option<Candidate> {
    if let Some(text) = normalize_quantity(value) {
        return Some(Candidate::Text(text));
    }
    value.is_object().then(|| Candidate::Quantity(value.clone()))
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

/// Text of the raw JSON-LD blocks, for diagnostics.
#[must_use]
pub fn raw_blocks(doc: &Document) -> Vec<String> {
    doc.select(JSON_LD_SELECTOR)
        .nodes()
        .iter()
        .map(|n| dom::normalized_text(&Selection::from(*n)))
        .collect()
}
