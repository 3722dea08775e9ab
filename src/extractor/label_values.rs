//! Label-value scan over the biographical fragment.
//!
//! The fragment is rendered one text node per line. Lines mentioning a known
//! label are split into label and value, and the label decides which fields
//! the value feeds. Height, weight and birth date get a second chance from a
//! pattern search over the whole fragment text, and nationality from the
//! fragment's links.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{DOB_TEXT, HEIGHT_TEXT, LABEL_LINE, WEIGHT_TEXT};

/// Longest link text accepted as a nationality.
const MAX_NATIONALITY_LEN: usize = 60;

/// Raw values found in the fragment. `Some("")` means a label was present
/// with nothing after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelValues {
    pub dob: Option<String>,
    pub birthplace: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub nationality: Option<String>,
    pub position: Option<String>,
    pub preferred_foot: Option<String>,
    pub contract: Option<String>,
    pub debut: Option<String>,
}

/// Scan `fragment` for labelled values.
#[must_use]
pub fn extract_label_values(fragment: &Selection) -> LabelValues {
    let text = dom::line_text(fragment);
    let mut out = LabelValues::default();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if LABEL_LINE.is_match(line) {
            out.apply_line(line);
        }
    }

    if out.height.is_none() {
        out.height = first_group(&HEIGHT_TEXT, &text);
    }
    if out.weight.is_none() {
        out.weight = first_group(&WEIGHT_TEXT, &text);
    }
    if out.dob.is_none() {
        out.dob = first_group(&DOB_TEXT, &text);
    }
    if out.nationality.is_none() {
        out.nationality = nationality_link(fragment);
    }

    out
}

impl LabelValues {
    /// Record every field whose label rule matches `line`.
    fn apply_line(&mut self, line: &str) {
        let (label, value) = split_label(line);
        let whole_line = line.to_lowercase();
        let value_or_line = || {
            if value.is_empty() { line.to_string() } else { value.to_string() }
        };

        if label.contains("born") {
            self.dob = Some(value.to_string());
        }
        if (label.contains("birth") && label.contains("place")) || label.contains("birthplace") {
            self.birthplace = Some(value.to_string());
        }
        if label.contains("height") {
            self.height = Some(value.to_string());
        }
        if label.contains("weight") {
            self.weight = Some(value.to_string());
        }
        if label.contains("nationalit") {
            self.nationality = Some(value.to_string());
        }
        if label.starts_with("position") {
            self.position = Some(value.to_string());
        }
        if label.contains("foot") {
            self.preferred_foot = Some(value.to_string());
        }
        if label.contains("contract") || whole_line.contains("expires") {
            self.contract = Some(value_or_line());
        }
        if label.contains("debut") || whole_line.contains("debut") {
            self.debut = Some(value_or_line());
        }
    }
}

/// Split a line into a lowercase label and a trimmed value.
///
/// The first colon separates them when present, otherwise the first run of
/// whitespace does.
fn split_label(line: &str) -> (String, &str) {
    let (label, value) = line
        .split_once(':')
        .or_else(|| line.split_once(char::is_whitespace))
        .unwrap_or((line, ""));
    (label.trim().to_lowercase(), value.trim())
}

fn first_group(re: &regex::Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// First link that reads like a country name rather than a profile link.
fn nationality_link(fragment: &Selection) -> Option<String> {
    fragment.select("a").nodes().iter().find_map(|node| {
        let link = Selection::from(*node);
        let text_tendril = dom::text_content(&link);
        let text = text_tendril.trim().to_string();
        let href = dom::get_attribute(&link, "href").unwrap_or_default();

        let looks_like_name = text.chars().next().is_some_and(char::is_uppercase)
            && text.chars().count() < MAX_NATIONALITY_LEN;
        let is_profile = href.contains("players") || href.contains("teams");

        (looks_like_name && !is_profile).then_some(text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(html: &str) -> LabelValues {
        let doc = dom::parse(html);
        extract_label_values(&doc.select("#meta"))
    }

    #[test]
    fn test_colon_separated_lines() {
        let values = scan(
            r#"<div id="meta">
                <p>Born: 5 February 1985</p>
                <p>Place of birth: Funchal, Portugal</p>
                <p>Height: 187 cm</p>
                <p>Weight: 83 kg</p>
                <p>Nationality: Portugal</p>
                <p>Position: Forward</p>
                <p>Preferred foot: Right</p>
            </div>"#,
        );

        assert_eq!(values.dob.as_deref(), Some("5 February 1985"));
        assert_eq!(values.birthplace.as_deref(), Some("Funchal, Portugal"));
        assert_eq!(values.height.as_deref(), Some("187 cm"));
        assert_eq!(values.weight.as_deref(), Some("83 kg"));
        assert_eq!(values.nationality.as_deref(), Some("Portugal"));
        assert_eq!(values.position.as_deref(), Some("Forward"));
        assert_eq!(values.preferred_foot.as_deref(), Some("Right"));
        assert_eq!(values.contract, None);
        assert_eq!(values.debut, None);
    }

    #[test]
    fn test_whitespace_split_without_colon() {
        let values = scan(r#"<div id="meta"><p>Height 1.87m</p><p>Birthplace Funchal</p></div>"#);
        assert_eq!(values.height.as_deref(), Some("1.87m"));
        assert_eq!(values.birthplace.as_deref(), Some("Funchal"));
    }

    #[test]
    fn test_empty_value_is_recorded() {
        let values = scan(r#"<div id="meta"><p><strong>Born:</strong></p></div>"#);
        assert_eq!(values.dob.as_deref(), Some(""));
    }

    #[test]
    fn test_contract_and_debut_fall_back_to_whole_line() {
        let values = scan(
            r#"<div id="meta">
                <p>Contract:</p>
                <p>Senior debut 2002</p>
            </div>"#,
        );

        assert_eq!(values.contract.as_deref(), Some("Contract:"));
        // Split on whitespace: the label is "senior", the line mentions debut.
        assert_eq!(values.debut.as_deref(), Some("debut 2002"));
    }

    #[test]
    fn test_line_without_value_keeps_line() {
        let values = scan(r#"<div id="meta"><p>Debut</p></div>"#);
        assert_eq!(values.debut.as_deref(), Some("Debut"));
    }

    #[test]
    fn test_pattern_fallbacks_over_fragment_text() {
        let values = scan(
            r#"<div id="meta">
                <p><span>187cm</span>, <span>83kg</span> (6-2, 183lb)</p>
                <p><span>1985-02-05</span></p>
            </div>"#,
        );

        assert_eq!(values.height.as_deref(), Some("187cm"));
        assert_eq!(values.weight.as_deref(), Some("83kg"));
        assert_eq!(values.dob.as_deref(), Some("1985-02-05"));
    }

    #[test]
    fn test_nationality_from_link() {
        let values = scan(
            r#"<div id="meta">
                <a href="/en/players/abc/Someone">Teammate Name</a>
                <a href="/en/squads/xyz/teams">Club</a>
                <a href="/en/country/POR">lowercase first</a>
                <a href="/en/country/POR">Portugal</a>
            </div>"#,
        );
        assert_eq!(values.nationality.as_deref(), Some("Portugal"));
    }

    #[test]
    fn test_labelled_nationality_beats_link() {
        let values = scan(
            r#"<div id="meta"><p>Nationality: Brazil</p><a href="/en/country/POR">Portugal</a></div>"#,
        );
        assert_eq!(values.nationality.as_deref(), Some("Brazil"));
    }

    #[test]
    fn test_split_label() {
        assert_eq!(split_label("Born: 5 Feb 1985"), ("born".to_string(), "5 Feb 1985"));
        assert_eq!(split_label("Height   187cm"), ("height".to_string(), "187cm"));
        assert_eq!(split_label("Footed"), ("footed".to_string(), ""));
    }
}
