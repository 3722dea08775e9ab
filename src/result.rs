//! Result types for extraction output.
//!
//! This module defines the subject record produced for every document, the
//! closed set of fields it carries, and the provenance tag attached to each
//! resolved field.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::fragment::DiscoveryMethod;

/// Placeholder stored in any field that no strategy resolved.
pub const NOT_FOUND: &str = "Not Found";

/// The fields of a subject record, in output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Dob,
    Age,
    Height,
    Weight,
    Nationality,
    Position,
    PreferredFoot,
    Birthplace,
    Debut,
    ContractUntil,
}

impl Field {
    /// Every field, in column order.
    pub const ALL: [Field; 11] = [
        Field::Name,
        Field::Dob,
        Field::Age,
        Field::Height,
        Field::Weight,
        Field::Nationality,
        Field::Position,
        Field::PreferredFoot,
        Field::Birthplace,
        Field::Debut,
        Field::ContractUntil,
    ];

    /// Column name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Dob => "dob",
            Field::Age => "age",
            Field::Height => "height",
            Field::Weight => "weight",
            Field::Nationality => "nationality",
            Field::Position => "position",
            Field::PreferredFoot => "preferred_foot",
            Field::Birthplace => "birthplace",
            Field::Debut => "debut",
            Field::ContractUntil => "contract_until",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The strategy that produced a field's final value.
///
/// Variants are listed from most to least trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// The document's primary heading (name only).
    Heading,
    /// Embedded JSON-LD describing the subject.
    StructuredData,
    /// A labelled line inside the located fragment.
    LabelValue,
    /// A bold-label heuristic run over the whole document.
    FieldText,
    /// A contract or debut heuristic run over the located fragment.
    FragmentText,
    /// A contract or debut pattern run over the whole document text.
    DocumentText,
    /// A `span[itemprop]` element.
    Itemprop,
    /// Computed from another resolved field (age from dob).
    Derived,
    /// No strategy produced a usable value.
    Unresolved,
}

impl Source {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Source::Heading => "heading",
            Source::StructuredData => "structured_data",
            Source::LabelValue => "label_value",
            Source::FieldText => "field_text",
            Source::FragmentText => "fragment_text",
            Source::DocumentText => "document_text",
            Source::Itemprop => "itemprop",
            Source::Derived => "derived",
            Source::Unresolved => "unresolved",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Biographical fields of one subject.
///
/// Every field always holds a value: either the resolved text or
/// [`NOT_FOUND`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectRecord {
    pub name: String,
    pub dob: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub nationality: String,
    pub position: String,
    pub preferred_foot: String,
    pub birthplace: String,
    pub debut: String,
    pub contract_until: String,
}

impl Default for SubjectRecord {
    fn default() -> Self {
        let nf = || NOT_FOUND.to_string();
        Self {
            name: nf(),
            dob: nf(),
            age: nf(),
            height: nf(),
            weight: nf(),
            nationality: nf(),
            position: nf(),
            preferred_foot: nf(),
            birthplace: nf(),
            debut: nf(),
            contract_until: nf(),
        }
    }
}

impl SubjectRecord {
    /// Column names in output order.
    pub const COLUMNS: [&'static str; 11] = [
        "name",
        "dob",
        "age",
        "height",
        "weight",
        "nationality",
        "position",
        "preferred_foot",
        "birthplace",
        "debut",
        "contract_until",
    ];

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Dob => &self.dob,
            Field::Age => &self.age,
            Field::Height => &self.height,
            Field::Weight => &self.weight,
            Field::Nationality => &self.nationality,
            Field::Position => &self.position,
            Field::PreferredFoot => &self.preferred_foot,
            Field::Birthplace => &self.birthplace,
            Field::Debut => &self.debut,
            Field::ContractUntil => &self.contract_until,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Dob => &mut self.dob,
            Field::Age => &mut self.age,
            Field::Height => &mut self.height,
            Field::Weight => &mut self.weight,
            Field::Nationality => &mut self.nationality,
            Field::Position => &mut self.position,
            Field::PreferredFoot => &mut self.preferred_foot,
            Field::Birthplace => &mut self.birthplace,
            Field::Debut => &mut self.debut,
            Field::ContractUntil => &mut self.contract_until,
        }
    }

    /// Whether `field` holds a resolved value.
    #[must_use]
    pub fn is_found(&self, field: Field) -> bool {
        self.get(field) != NOT_FOUND
    }

    /// Iterate `(field, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Result of extracting one document.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractResult {
    /// The resolved record.
    pub record: SubjectRecord,

    /// The strategy that produced each field.
    pub sources: BTreeMap<Field, Source>,

    /// How the biographical fragment was found, if it was.
    pub discovery: Option<DiscoveryMethod>,

    /// Caller-supplied document identifier (see `Options::source_id`).
    pub source_id: Option<String>,
}

impl ExtractResult {
    /// Header of the tabular output: the record columns plus the source.
    pub const CSV_HEADER: [&'static str; 12] = [
        "name",
        "dob",
        "age",
        "height",
        "weight",
        "nationality",
        "position",
        "preferred_foot",
        "birthplace",
        "debut",
        "contract_until",
        "source_url",
    ];

    /// Row values matching [`Self::CSV_HEADER`].
    ///
    /// The trailing source column is empty when no identifier was supplied.
    #[must_use]
    pub fn row(&self) -> Vec<&str> {
        let mut row: Vec<&str> = self.record.iter().map(|(_, v)| v).collect();
        row.push(self.source_id.as_deref().unwrap_or(""));
        row
    }

    /// The strategy that produced `field`.
    #[must_use]
    pub fn source_of(&self, field: Field) -> Source {
        self.sources.get(&field).copied().unwrap_or(Source::Unresolved)
    }
}
