//! Byte input decoding.
//!
//! Profile pages are not always served as UTF-8. The charset is taken from
//! a byte-order mark or a `<meta>` declaration near the top of the document
//! and the bytes are decoded lossily, so accented names and birthplaces
//! survive instead of failing the whole extraction.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::{CHARSET_META, CONTENT_TYPE_CHARSET};

/// Bytes searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Detect the character encoding of an HTML document.
///
/// Order: byte-order mark, `<meta charset>`, then
/// `<meta http-equiv="Content-Type">`. Unknown labels are ignored and the
/// default is UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Charset label declared in `head`, `<meta charset>` taking precedence.
fn declared_charset(head: &str) -> Option<String> {
    [&CHARSET_META, &CONTENT_TYPE_CHARSET]
        .into_iter()
        .find_map(|re| re.captures(head).and_then(|c| c.get(1)))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD.
///
/// # Examples
///
/// ```
/// use bioscrape::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><span itemprop=\"birthPlace\">S\xE3o Paulo</span>";
/// assert!(transcode_to_utf8(html).contains("São Paulo"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences");
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_utf8_from_meta_charset() {
        let html = br#"<html><head><meta charset="utf-8"></head><body><h1>Jane Roe</h1></body></html>"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn latin1_label_maps_to_windows1252() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detect_charset_from_content_type() {
        let html = br#"<META HTTP-EQUIV="content-type" CONTENT="text/html; CHARSET=windows-1252">"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn byte_order_mark_wins_over_declaration() {
        let html = b"\xEF\xBB\xBF<meta charset=\"windows-1252\"><h1>J\xC3\xBCrgen</h1>";
        assert_eq!(detect_encoding(html), UTF_8);
        assert!(transcode_to_utf8(html).contains("Jürgen"));
    }

    #[test]
    fn unknown_label_defaults_to_utf8() {
        assert_eq!(detect_encoding(br#"<meta charset="klingon">"#), UTF_8);
        assert_eq!(detect_encoding(b"<h1>Jane Roe</h1>"), UTF_8);
    }

    #[test]
    fn declaration_after_sniff_window_is_ignored() {
        let mut html = vec![b' '; SNIFF_LEN];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(detect_encoding(&html), UTF_8);
    }

    #[test]
    fn transcode_latin1_birthplace() {
        let html = b"<meta charset=\"ISO-8859-1\"><p>Born in M\xFCnchen</p>";
        assert!(transcode_to_utf8(html).contains("München"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let html = b"<h1>Jane \xFF\xFE Roe</h1>";
        let result = transcode_to_utf8(html);
        assert!(result.contains('\u{FFFD}'));
        assert!(result.contains("Roe"));
    }

    #[test]
    fn declared_charset_reads_first_declaration() {
        let head = r#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1"><meta charset="utf-8">"#;
        // Both patterns match the first tag's charset parameter.
        assert_eq!(declared_charset(head).as_deref(), Some("ISO-8859-1"));
        assert_eq!(declared_charset("<meta charset=utf-8>").as_deref(), Some("utf-8"));
        assert_eq!(declared_charset("<title>x</title>"), None);
    }
}
