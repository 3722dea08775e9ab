//! Quantity normalization for height and weight.
//!
//! JSON-LD publishes quantities either as plain strings (`"1.87 m"`) or as
//! `QuantitativeValue` objects (`{"value": 187, "unitCode": "CMT"}`). Both
//! are reduced to one display string.

use serde_json::Value;

/// Reduce a quantity to a display string.
///
/// - a string is returned trimmed;
/// - an object with a non-empty string `value` returns that value trimmed;
/// - an object with `value` plus `unitText` or `unitCode` returns
///   `"<value> <unit>"`, preferring `unitText`.
///
/// Returns `None` for null, empty or otherwise uninterpretable input.
///
/// # Example
///
/// ```rust
/// use bioscrape::normalize::normalize_quantity;
/// use serde_json::json;
///
/// assert_eq!(normalize_quantity(&json!(" 1.87 m ")).as_deref(), Some("1.87 m"));
/// assert_eq!(
///     normalize_quantity(&json!({"value": 187, "unitText": "cm"})).as_deref(),
///     Some("187 cm")
/// );
/// ```
#[must_use]
pub fn normalize_quantity(quantity: &Value) -> Option<String> {
    match quantity {
        Value::String(s) => non_empty(s.trim()),
        Value::Object(map) => {
            let value = map.get("value")?;
            if let Value::String(s) = value {
                if let Some(v) = non_empty(s.trim()) {
                    return Some(v);
                }
            }
            let unit = unit_of(map)?;
            non_empty(format!("{} {unit}", scalar_text(value)).trim())
        }
        _ => None,
    }
}

/// Collapse a quantity that could not be normalized into a single string.
///
/// A string `value` wins; anything else is serialized as compact JSON.
#[must_use]
pub fn collapse_quantity(quantity: &Value) -> String {
    match quantity {
        Value::String(s) => s.trim().to_string(),
        Value::Object(map) => match map.get("value") {
            Some(Value::String(s)) => s.trim().to_string(),
            _ => quantity.to_string(),
        },
        other => other.to_string(),
    }
}

fn unit_of(map: &serde_json::Map<String, Value>) -> Option<String> {
    ["unitText", "unitCode"]
        .iter()
        .filter_map(|key| map.get(*key))
        .map(scalar_text)
        .find(|u| !u.is_empty())
        .or_else(|| {
            // A unit key that is present but empty still marks a quantity.
            (map.contains_key("unitText") || map.contains_key("unitCode")).then(String::new)
        })
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
