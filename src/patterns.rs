//! Compiled regex patterns for field extraction.
//!
//! All patterns are compiled once at first use with `LazyLock`.
//! Capture group 1 always holds the extracted value unless noted otherwise.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Date Normalization
// =============================================================================

/// A word followed by a four digit year, e.g. `June 2027`. Group 0 is parsed.
pub static MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z]+)\s+(\d{4})").expect("MONTH_YEAR regex")
});

/// ISO date anywhere in a string.
pub static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4}-\d{2}-\d{2})").expect("ISO_DATE regex")
});

/// Day, month name and year anywhere in a string, e.g. `5 February 1985`.
pub static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}\s+[A-Za-z]{3,9}\s+\d{4})").expect("DAY_MONTH_YEAR regex")
});

// =============================================================================
// Label-Value Scan
// =============================================================================

/// Lines worth splitting into label and value.
pub static LABEL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(born|birth|weight|height|nationalit|foot|position|place of birth|contract|debut)")
        .expect("LABEL_LINE regex")
});

/// Height in centimetres or metres, e.g. `187cm` or `1.87 m`.
pub static HEIGHT_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{2,3}\s?cm|\d\.\d+\s?m)").expect("HEIGHT_TEXT regex")
});

/// Weight in kilograms, e.g. `83kg`.
pub static WEIGHT_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{2,3}\s?kg)").expect("WEIGHT_TEXT regex")
});

/// Loose date-like text used when no born line was found.
pub static DOB_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}\s+\w+\s+\d{4}|\d{4}-\d{2}-\d{2}|\w+\s+\d{4})").expect("DOB_TEXT regex")
});

// =============================================================================
// Field-Specific Patterns
// =============================================================================

/// Foot value next to a `Footed` label inside a bold element's parent.
pub static FOOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Footed[:\s]*([A-Za-z\-]+)").expect("FOOTED regex")
});

/// Foot value anywhere in the document text.
pub static FOOT_ANYWHERE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Preferred\s*Foot|Footed|Footedness|Foot)[:\s]+([A-Za-z\-]+)")
        .expect("FOOT_ANYWHERE regex")
});

/// Position value, stopping before a following foot label.
pub static POSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Position[:\s]*(.+?)(?:Foot|Footed|Footedness|$)").expect("POSITION regex")
});

/// Leading `in ` before a birthplace.
pub static BIRTHPLACE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*in\s+").expect("BIRTHPLACE_PREFIX regex")
});

/// `Expires <date>` ending at a period, `Via` or end of text.
pub static CONTRACT_EXPIRES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Expires\s+([A-Za-z0-9,\s\-]+?)(?:\.|Via|$)").expect("CONTRACT_EXPIRES regex")
});

/// `Contract until <date>` or `Contract: <date>`.
pub static CONTRACT_UNTIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Contract(?:\s+until|\s*[:])\s*([A-Za-z0-9,\s\-]+?)(?:\.|$)")
        .expect("CONTRACT_UNTIL regex")
});

/// `Expires <Month> <year>` with arbitrary trailing text.
pub static CONTRACT_EXPIRES_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Expires\s+([A-Za-z]+\s+\d{4})").expect("CONTRACT_EXPIRES_MONTH regex")
});

/// The word `debut` on its own.
pub static DEBUT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bdebut\b").expect("DEBUT_WORD regex")
});

/// Leading label of a debut line, e.g. `Senior debut: `.
pub static DEBUT_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Za-z ]*debut[:\s\-]*").expect("DEBUT_LABEL regex")
});

/// Loose `Debut ...` run inside a fragment. Group 1 includes the label.
pub static DEBUT_LOOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Debut[:\s]*[A-Za-z0-9,\s\-]+)").expect("DEBUT_LOOSE regex")
});

/// `Debut` value anywhere in the document text.
pub static DEBUT_ANYWHERE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bDebut[:\s\-]*([A-Za-z0-9,\s\-]+)").expect("DEBUT_ANYWHERE regex")
});

// =============================================================================
// Text Cleaning and Encoding
// =============================================================================

/// Matches whitespace runs for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// `<meta charset="...">`.
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("CHARSET_META regex")
});

/// `<meta http-equiv="Content-Type" content="...; charset=...">`.
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("CONTENT_TYPE_CHARSET regex")
});

// =============================================================================
// CSS Selectors
// =============================================================================

/// Embedded JSON-LD blocks.
pub const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

/// Elements used as inline labels ("Born:", "Position:").
pub const BOLD_SELECTOR: &str = "strong, b";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_line_matches_known_labels() {
        assert!(LABEL_LINE.is_match("Born: February 5, 1985"));
        assert!(LABEL_LINE.is_match("NATIONALITY Portugal"));
        assert!(LABEL_LINE.is_match("Senior debut 2002"));
        assert!(!LABEL_LINE.is_match("Club: Al Nassr"));
    }

    #[test]
    fn height_text_accepts_centimetres_and_metres() {
        let cm = HEIGHT_TEXT.captures("187cm, 83kg").and_then(|c| c.get(1));
        assert_eq!(cm.map(|m| m.as_str()), Some("187cm"));

        let m = HEIGHT_TEXT.captures("Height 1.87 m").and_then(|c| c.get(1));
        assert_eq!(m.map(|m| m.as_str()), Some("1.87 m"));
    }

    #[test]
    fn position_stops_before_foot_label() {
        let caps = POSITION.captures("Position: FW ▪ Footed: Right");
        let value = caps.and_then(|c| c.get(1)).map(|m| m.as_str().trim());
        assert_eq!(value, Some("FW ▪"));
    }

    #[test]
    fn contract_expires_stops_at_via() {
        let caps = CONTRACT_EXPIRES.captures("Contract Expires June 2027 Via option.");
        let value = caps.and_then(|c| c.get(1)).map(|m| m.as_str().trim());
        assert_eq!(value, Some("June 2027"));
    }

    #[test]
    fn debut_word_requires_word_boundary() {
        assert!(DEBUT_WORD.is_match("International debut: 2003"));
        assert!(!DEBUT_WORD.is_match("Debuted for the club"));
    }

    #[test]
    fn whitespace_normalize_collapses_spaces() {
        let result = WHITESPACE_NORMALIZE.replace_all("Cristiano \n  Ronaldo", " ");
        assert_eq!(result, "Cristiano Ronaldo");
    }
}
