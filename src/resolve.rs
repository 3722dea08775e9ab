//! Resolution engine.
//!
//! Every field has an ordered list of strategies, most trusted first. The
//! first strategy producing a usable value wins and the strategies after it
//! never run. A field that nothing resolves keeps [`NOT_FOUND`].
//!
//! Evidence shared by several fields (the JSON-LD subject, the label scan of
//! the fragment, the born section) is gathered once per document.

use std::cell::OnceCell;
use std::collections::BTreeMap;

use crate::dom::{self, Document, Selection};
use crate::extractor::{self, is_usable_text, BornSection, Candidate, LabelValues};
use crate::fragment::{self, LocatedFragment};
use crate::metadata::{self, PersonSchema};
use crate::normalize::{age_from_text, iso_if_exact};
use crate::options::Options;
use crate::result::{ExtractResult, Field, Source, SubjectRecord, NOT_FOUND};

type Probe<'s> = Box<dyn Fn() -> Option<Candidate> + 's>;

/// Ordered strategies for one field.
struct Cascade<'s> {
    field: Field,
    steps: Vec<(Source, Probe<'s>)>,
}

impl<'s> Cascade<'s> {
    fn new(field: Field) -> Self {
        Self { field, steps: Vec::new() }
    }

    fn then<C: Into<Candidate>>(mut self, source: Source, probe: impl Fn() -> Option<C> + 's) -> Self {
        self.steps.push((source, Box::new(move || probe().map(Into::into))));
        self
    }

    fn then_if<C: Into<Candidate>>(
        self,
        enabled: bool,
        source: Source,
        probe: impl Fn() -> Option<C> + 's,
    ) -> Self {
        if enabled { self.then(source, probe) } else { self }
    }

    /// Run the strategies in order and return the first usable value,
    /// collapsed to text and trimmed.
    fn run(self) -> Option<(Source, String)> {
        for (source, probe) in self.steps {
            let Some(candidate) = probe() else {
                continue;
            };
            if !candidate.is_usable() {
                tracing::trace!(field = %self.field, %source, "discarding unusable candidate");
                continue;
            }
            let text = candidate.into_text().trim().to_string();
            if is_usable_text(&text) {
                return Some((source, text));
            }
        }
        None
    }
}

/// Everything the strategies read, gathered once per document.
struct Evidence<'a> {
    doc: &'a Document,
    root: Selection<'a>,
    fragment: Option<LocatedFragment<'a>>,
    person: PersonSchema,
    labels: LabelValues,
    born: BornSection,
    document_text: OnceCell<String>,
}

impl<'a> Evidence<'a> {
    fn gather(doc: &'a Document, options: &Options) -> Self {
        let root = dom::document_root(doc);
        let fragment = fragment::locate(doc, options.use_comment_fallback);
        let labels = fragment
            .as_ref()
            .map(|f| extractor::extract_label_values(&f.fragment.selection()))
            .unwrap_or_default();
        let person = metadata::extract_person(doc).unwrap_or_default();
        let born = extractor::extract_born_section(&root);

        Self {
            doc,
            root,
            fragment,
            person,
            labels,
            born,
            document_text: OnceCell::new(),
        }
    }

    /// Rendered text of the whole document, computed on first use.
    fn document_text(&self) -> &str {
        self.document_text.get_or_init(|| dom::spaced_text(&self.root))
    }

    fn fragment_text(&self, lines: bool) -> Option<String> {
        let sel = self.fragment.as_ref()?.fragment.selection();
        Some(if lines { dom::line_text(&sel) } else { dom::spaced_text(&sel) })
    }

    /// The strategy list for `field`, in precedence order.
    fn cascade(&self, field: Field, options: &Options) -> Cascade<'_> {
        let cascade = Cascade::new(field);
        match field {
            Field::Name => cascade.then(Source::Heading, move || metadata::primary_heading(self.doc)),
            Field::Dob => cascade
                .then(Source::StructuredData, move || self.person.birth_date.clone())
                .then(Source::LabelValue, move || self.labels.dob.clone())
                .then(Source::FieldText, move || self.born.dob.clone()),
            Field::Height => cascade
                .then(Source::StructuredData, move || self.person.height.clone())
                .then(Source::LabelValue, move || self.labels.height.clone())
                .then(Source::Itemprop, move || metadata::itemprop_text(self.doc, "height")),
            Field::Weight => cascade
                .then(Source::StructuredData, move || self.person.weight.clone())
                .then(Source::LabelValue, move || self.labels.weight.clone())
                .then(Source::Itemprop, move || metadata::itemprop_text(self.doc, "weight")),
            Field::Nationality => cascade
                .then(Source::StructuredData, move || self.person.nationality.clone())
                .then(Source::LabelValue, move || self.labels.nationality.clone())
                .then(Source::Itemprop, move || metadata::itemprop_text(self.doc, "nationality")),
            Field::Position => cascade
                .then(Source::StructuredData, move || self.person.role_name.clone())
                .then(Source::LabelValue, move || self.labels.position.clone())
                .then(Source::FieldText, move || extractor::extract_position(&self.root)),
            Field::PreferredFoot => cascade
                .then(Source::LabelValue, move || self.labels.preferred_foot.clone())
                .then(Source::FieldText, move || extractor::extract_preferred_foot(&self.root)),
            Field::Birthplace => cascade
                .then(Source::StructuredData, move || self.person.birth_place.clone())
                .then(Source::LabelValue, move || self.labels.birthplace.clone())
                .then(Source::FieldText, move || self.born.birthplace.clone())
                .then(Source::Itemprop, move || metadata::itemprop_text(self.doc, "birthPlace")),
            Field::Debut => cascade
                .then(Source::LabelValue, move || self.labels.debut.clone())
                .then(Source::FragmentText, move || {
                    self.fragment_text(true).and_then(|t| extractor::extract_debut(&t))
                })
                .then_if(options.use_document_fallback, Source::DocumentText, move || {
                    extractor::extract_debut_whole_text(self.document_text())
                }),
            Field::ContractUntil => cascade
                .then(Source::LabelValue, move || self.labels.contract.clone())
                .then(Source::FragmentText, move || {
                    self.fragment_text(false).and_then(|t| extractor::extract_contract(&t))
                })
                .then_if(options.use_document_fallback, Source::DocumentText, move || {
                    extractor::extract_contract_whole_text(self.document_text())
                }),
            // Derived from dob after the cascades have run.
            Field::Age => cascade,
        }
    }
}

/// Date-typed values that are a date and nothing else are stored in ISO
/// form. Dates inside longer text keep the text; the contract, debut and
/// born-section extractors have already normalized their own output.
fn finish_value(field: Field, value: String) -> String {
    match field {
        Field::Dob | Field::Debut | Field::ContractUntil => iso_if_exact(&value),
        _ => value,
    }
}

/// Resolve every field of the subject record for `doc`.
///
/// Never fails: fields no strategy resolves hold [`NOT_FOUND`] and are
/// tagged [`Source::Unresolved`].
#[must_use]
pub fn resolve(doc: &Document, options: &Options) -> ExtractResult {
    let evidence = Evidence::gather(doc, options);
    let mut record = SubjectRecord::default();
    let mut sources = BTreeMap::new();

    for field in Field::ALL.into_iter().filter(|f| *f != Field::Age) {
        let (source, value) = match evidence.cascade(field, options).run() {
            Some((source, value)) => (source, finish_value(field, value)),
            None => (Source::Unresolved, NOT_FOUND.to_string()),
        };
        tracing::debug!(%field, %source, "resolved field");
        *record.slot_mut(field) = value;
        sources.insert(field, source);
    }

    let age = record
        .is_found(Field::Dob)
        .then(|| age_from_text(&record.dob, options.reference_date()))
        .flatten();
    let age_source = match age {
        Some(age) => {
            record.age = age.to_string();
            Source::Derived
        }
        None => Source::Unresolved,
    };
    tracing::debug!(field = %Field::Age, source = %age_source, "resolved field");
    sources.insert(Field::Age, age_source);

    ExtractResult {
        record,
        sources,
        discovery: evidence.fragment.as_ref().map(|f| f.method),
        source_id: options.source_id.clone(),
    }
}
