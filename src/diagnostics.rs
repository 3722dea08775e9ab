//! Layout diagnostics.
//!
//! When a site changes its markup, the quickest way to see why a field went
//! missing is to look at the raw HTML around the heading and at the lines
//! mentioning the labels the extractors look for. Nothing here feeds back
//! into resolution.

use std::fmt;

use serde::Serialize;

use crate::dom::{self, Document};
use crate::fragment::{self, DiscoveryMethod};
use crate::metadata::json_ld;

/// Bytes of raw markup kept before the first `<h1`.
const CONTEXT_BEFORE: usize = 400;

/// Bytes of raw markup kept from the first `<h1` on.
const CONTEXT_AFTER: usize = 2000;

/// A snapshot of the parts of a page the extractors depend on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Outer HTML of the first `<h1>`.
    pub heading_html: Option<String>,
    /// Raw source around the first `<h1` tag.
    pub raw_context: Option<String>,
    /// Raw source lines mentioning "born".
    pub born_lines: Vec<String>,
    /// Raw source lines mentioning "foot" (including "footedness").
    pub foot_lines: Vec<String>,
    /// Text of every JSON-LD block.
    pub json_ld: Vec<String>,
    /// How the biographical fragment would be found.
    pub discovery: Option<DiscoveryMethod>,
}

/// Collect diagnostics for `html`.
#[must_use]
pub fn diagnose(html: &str) -> Diagnostics {
    let doc = dom::parse(html);
    let heading = doc.select("h1");
    let heading_html = heading.exists().then(|| heading.first().html().to_string());

    Diagnostics {
        heading_html,
        raw_context: raw_context(html),
        born_lines: lines_mentioning(html, &["born"]),
        foot_lines: lines_mentioning(html, &["foot"]),
        json_ld: json_ld::raw_blocks(&doc),
        discovery: discovery(&doc),
    }
}

fn discovery(doc: &Document) -> Option<DiscoveryMethod> {
    fragment::locate(doc, true).map(|f| f.method)
}

/// Raw markup from `CONTEXT_BEFORE` bytes before the first `<h1` to
/// `CONTEXT_AFTER` bytes after it, widened to character boundaries.
fn raw_context(html: &str) -> Option<String> {
    let idx = html.find("<h1")?;
    let start = floor_boundary(html, idx.saturating_sub(CONTEXT_BEFORE));
    let end = ceil_boundary(html, idx.saturating_add(CONTEXT_AFTER).min(html.len()));
    Some(html[start..end].to_string())
}

fn floor_boundary(s: &str, mut i: usize) -> usize {
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_boundary(s: &str, mut i: usize) -> usize {
    while !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// Source lines containing any of `needles`, compared case-insensitively.
fn lines_mentioning(html: &str, needles: &[&str]) -> Vec<String> {
    html.lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            needles.iter().any(|n| lower.contains(n))
        })
        .map(str::to_string)
        .collect()
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(heading) = &self.heading_html {
            writeln!(f, "=== H1 ===\n{heading}")?;
        }
        if let Some(context) = &self.raw_context {
            writeln!(f, "\n=== RAW CONTEXT AROUND <h1> ===\n{context}")?;
        }
        writeln!(f, "\n=== LINES CONTAINING 'born' ===")?;
        for line in &self.born_lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "\n=== LINES CONTAINING 'foot' ===")?;
        for line in &self.foot_lines {
            writeln!(f, "{line}")?;
        }
        for (i, block) in self.json_ld.iter().enumerate() {
            writeln!(f, "\n=== JSON-LD #{i} ===\n{block}")?;
        }
        match self.discovery {
            Some(method) => writeln!(f, "\nfragment: {method}"),
            None => writeln!(f, "\nfragment: none"),
        }
    }
}
