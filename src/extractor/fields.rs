//! Bold-label heuristics.
//!
//! Many profile layouts write `<strong>Born:</strong> <span>date</span>
//! <span>in place</span>` or `<strong>Position:</strong> FW ▪
//! <strong>Footed:</strong> Right`. These extractors find the bold label and
//! read the text around it. They run against the whole document.

use dom_query::Selection;

use crate::dom;
use crate::normalize::iso_or_raw;
use crate::patterns::{BIRTHPLACE_PREFIX, BOLD_SELECTOR, FOOTED, FOOT_ANYWHERE, POSITION};

/// Separator glyph that trails a position before the foot label.
const POSITION_SEPARATOR: char = '▪';

/// Birth date and birthplace read after a bold "Born" label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BornSection {
    /// ISO date when the text parses, the raw text otherwise.
    pub dob: Option<String>,
    pub birthplace: Option<String>,
}

/// Read the birth date and birthplace following a bold "Born" label.
///
/// The first `span` after the label holds the date and the next `span`
/// holds the birthplace, with a leading "in " removed.
#[must_use]
pub fn extract_born_section(root: &Selection) -> BornSection {
    let Some(label) = dom::first_containing(root, BOLD_SELECTOR, "born") else {
        return BornSection::default();
    };
    let Some(date_span) = dom::find_next(root, &label, "span") else {
        return BornSection::default();
    };

    let raw_date = dom::normalized_text(&date_span);
    let dob = (!raw_date.is_empty()).then(|| iso_or_raw(&raw_date));

    let birthplace = dom::find_next(root, &date_span, "span").and_then(|span| {
        let text = dom::normalized_text(&span);
        let place = BIRTHPLACE_PREFIX.replace(&text, "").trim().to_string();
        (!place.is_empty()).then_some(place)
    });

    BornSection { dob, birthplace }
}

/// Read the position next to a bold "Position" label.
#[must_use]
pub fn extract_position(root: &Selection) -> Option<String> {
    let label = dom::first_containing(root, BOLD_SELECTOR, "position")?;
    let parent_text = dom::spaced_text(&label.parent());

    let position = match POSITION.captures(&parent_text).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().trim().trim_end_matches(POSITION_SEPARATOR).trim().to_string(),
        None => parent_text.replace("Position:", "").trim().to_string(),
    };
    (!position.is_empty()).then_some(position)
}

/// Read the preferred foot.
///
/// A bold label mentioning "foot" is tried first (`Footed: Right`), then a
/// foot label anywhere in the text.
#[must_use]
pub fn extract_preferred_foot(root: &Selection) -> Option<String> {
    if let Some(label) = dom::first_containing(root, BOLD_SELECTOR, "foot") {
        let parent_text = dom::spaced_text(&label.parent());
        if let Some(foot) = capture(&FOOTED, &parent_text) {
            return Some(foot);
        }
    }
    capture(&FOOT_ANYWHERE, &dom::spaced_text(root))
}

fn capture(re: &regex::Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}
