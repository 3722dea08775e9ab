//! Date normalization.
//!
//! Profile pages write dates many ways ("1985-02-05", "5 February 1985",
//! "Feb 5, 1985", "June 2027", or a date buried in a sentence). Everything is
//! reduced to a `NaiveDate` and rendered as ISO `YYYY-MM-DD`.

use chrono::{Datelike, NaiveDate};

use crate::patterns::{DAY_MONTH_YEAR, ISO_DATE, MONTH_YEAR};

/// Formats that must match the whole input.
const FULL_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d %B %Y", "%d %b %Y", "%B %d, %Y", "%b %d, %Y"];

/// Month-and-year formats. The day defaults to the first of the month.
const MONTH_YEAR_FORMATS: &[&str] = &["%B %Y", "%b %Y"];

/// Parse a free-text date.
///
/// Tried in order: the exact formats above, then the first
/// `<word> <year>` run, the first ISO date, and the first
/// `<day> <month> <year>` run anywhere in the text. Only the first match of
/// each scan is attempted.
///
/// # Example
///
/// ```rust
/// use bioscrape::normalize::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("Feb 5, 1985"), NaiveDate::from_ymd_opt(1985, 2, 5));
/// assert_eq!(parse_date("Expires June 2027"), NaiveDate::from_ymd_opt(2027, 6, 1));
/// assert_eq!(parse_date("unknown"), None);
/// ```
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.replace('\u{a0}', " ");
    let text = text.trim();
    if let Some(date) = parse_exact_date(text) {
        return Some(date);
    }

    if let Some(m) = MONTH_YEAR.find(text) {
        if let Some(date) = parse_month_year(m.as_str()) {
            return Some(date);
        }
    }

    if let Some(m) = ISO_DATE.find(text) {
        if let Ok(date) = NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d") {
            return Some(date);
        }
    }

    let m = DAY_MONTH_YEAR.find(text)?;
    ["%d %B %Y", "%d %b %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(m.as_str(), fmt).ok())
}

/// Parse `text` only when the whole of it is a date in one of the exact
/// full or month-and-year formats. No scanning inside longer text.
#[must_use]
pub fn parse_exact_date(text: &str) -> Option<NaiveDate> {
    let text = text.replace('\u{a0}', " ");
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    FULL_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| parse_month_year(text))
}

fn parse_month_year(text: &str) -> Option<NaiveDate> {
    let anchored = format!("1 {text}");
    MONTH_YEAR_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&anchored, &format!("%d {fmt}")).ok())
}

/// Render a date in canonical ISO form.
#[must_use]
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// ISO form of `raw` when it parses as a date, otherwise `raw` trimmed.
#[must_use]
pub fn iso_or_raw(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.trim().to_string(), to_iso)
}

/// ISO form of `raw` when the whole of it is a date, otherwise `raw` trimmed.
///
/// Unlike [`iso_or_raw`], a date embedded in other text is left alone.
#[must_use]
pub fn iso_if_exact(raw: &str) -> String {
    parse_exact_date(raw).map_or_else(|| raw.trim().to_string(), to_iso)
}

/// Whole years between `birth` and `today`.
///
/// One year is taken off when today's month and day come before the birth
/// month and day. Birth dates after `today` give negative ages.
#[must_use]
pub fn compute_age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let before_birthday = (today.month(), today.day()) < (birth.month(), birth.day());
    today.year() - birth.year() - i32::from(before_birthday)
}

/// Age for a textual birth date, `None` when the text is not a date.
#[must_use]
pub fn age_from_text(birth: &str, today: NaiveDate) -> Option<i32> {
    parse_date(birth).map(|b| compute_age(b, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_exact_formats() {
        assert_eq!(parse_date("1985-02-05"), ymd(1985, 2, 5));
        assert_eq!(parse_date("1985/02/05"), ymd(1985, 2, 5));
        assert_eq!(parse_date("5 February 1985"), ymd(1985, 2, 5));
        assert_eq!(parse_date("05 Feb 1985"), ymd(1985, 2, 5));
        assert_eq!(parse_date("February 5, 1985"), ymd(1985, 2, 5));
        assert_eq!(parse_date("Feb 5, 1985"), ymd(1985, 2, 5));
    }

    #[test]
    fn test_month_year_defaults_to_first_day() {
        assert_eq!(parse_date("June 2027"), ymd(2027, 6, 1));
        assert_eq!(parse_date("Jun 2027"), ymd(2027, 6, 1));
    }

    #[test]
    fn test_non_breaking_space_is_normalized() {
        assert_eq!(parse_date("5\u{a0}February\u{a0}1985"), ymd(1985, 2, 5));
    }

    #[test]
    fn test_embedded_month_year() {
        assert_eq!(parse_date("until June 2027 (option)"), ymd(2027, 6, 1));
        assert_eq!(parse_date("Senior debut March 2003 vs Moreirense"), ymd(2003, 3, 1));
    }

    #[test]
    fn test_only_first_month_year_run_is_tried() {
        // "Debut 2002" is the first word-year run and is not a month, so the
        // scan moves on to the later strategies.
        assert_eq!(parse_date("Debut 2002, 14 August 2002"), ymd(2002, 8, 14));
    }

    #[test]
    fn test_embedded_iso_date() {
        assert_eq!(parse_date("born on 1985-02-05 in Funchal"), ymd(1985, 2, 5));
    }

    #[test]
    fn test_unparseable_returns_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("Right"), None);
        assert_eq!(parse_date("1985-13-45"), None);
    }

    #[test]
    fn test_iso_is_idempotent() {
        for iso in ["2000-02-29", "1985-02-05", "2027-06-01", "0999-01-01"] {
            let parsed = parse_date(iso);
            assert_eq!(parsed.map(to_iso).as_deref(), Some(iso));
        }
    }

    #[test]
    fn test_iso_or_raw_keeps_unparseable_text() {
        assert_eq!(iso_or_raw("June 2027"), "2027-06-01");
        assert_eq!(iso_or_raw("  end of season "), "end of season");
    }

    #[test]
    fn test_exact_parse_ignores_embedded_dates() {
        assert_eq!(parse_exact_date(" 5 February 1985 "), ymd(1985, 2, 5));
        assert_eq!(parse_exact_date("June 2027"), ymd(2027, 6, 1));
        assert_eq!(parse_exact_date("5 February 1985 in Funchal"), None);
        assert_eq!(parse_exact_date("until 30 June 2026."), None);
        assert_eq!(parse_exact_date(""), None);
    }

    #[test]
    fn test_iso_if_exact_keeps_surrounding_text() {
        assert_eq!(iso_if_exact("Feb 5, 1985"), "1985-02-05");
        assert_eq!(iso_if_exact("5 February 1985 in Funchal, Portugal"), "5 February 1985 in Funchal, Portugal");
        // The scanning parser would have read this as the first of June.
        assert_eq!(iso_or_raw("until 30 June 2026."), "2026-06-01");
        assert_eq!(iso_if_exact("until 30 June 2026."), "until 30 June 2026.");
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap_or_default();
        let feb_28 = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap_or_default();
        let mar_01 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default();

        assert_eq!(compute_age(birth, feb_28), 23);
        assert_eq!(compute_age(birth, mar_01), 24);
    }

    #[test]
    fn test_birthday_reached_today() {
        let birth = NaiveDate::from_ymd_opt(1985, 2, 5).unwrap_or_default();
        let today = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap_or_default();
        assert_eq!(compute_age(birth, today), 39);
    }

    #[test]
    fn test_future_birth_is_not_rejected() {
        let birth = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap_or_default();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default();
        assert_eq!(compute_age(birth, today), -6);
    }

    #[test]
    fn test_age_from_text() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default();
        assert_eq!(age_from_text("February 5, 1985", today), Some(39));
        assert_eq!(age_from_text("unknown", today), None);
    }
}
