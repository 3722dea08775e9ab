//! Debut-date extraction.

use crate::normalize::{iso_or_raw, parse_date, to_iso};
use crate::patterns::{DEBUT_ANYWHERE, DEBUT_LABEL, DEBUT_LOOSE, DEBUT_WORD};

/// Debut from line-broken fragment text.
///
/// The first line containing the word "debut" decides: its date when the
/// line holds one, otherwise the line with its leading `... debut` label
/// removed. Without such a line, a looser `Debut ...` run is used.
#[must_use]
pub fn extract_debut(text: &str) -> Option<String> {
    let line = text
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && DEBUT_WORD.is_match(l));

    if let Some(line) = line {
        if let Some(date) = parse_date(line) {
            return Some(to_iso(date));
        }
        let rest = DEBUT_LABEL.replace(line, "");
        let rest = rest.trim();
        return (!rest.is_empty()).then(|| rest.to_string());
    }

    let run = DEBUT_LOOSE.captures(text)?.get(1)?.as_str();
    let candidate = run.split_once(':').map_or(run, |(_, rest)| rest).trim();
    (!candidate.is_empty()).then(|| iso_or_raw(candidate))
}

/// Debut from the whole document text.
#[must_use]
pub fn extract_debut_whole_text(text: &str) -> Option<String> {
    let candidate = DEBUT_ANYWHERE.captures(text)?.get(1)?.as_str().trim();
    (!candidate.is_empty()).then(|| iso_or_raw(candidate))
}
