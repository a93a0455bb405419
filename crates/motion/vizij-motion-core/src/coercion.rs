//! Numeric coercion for loosely typed inputs.
//! Mirrors the browser's `parseFloat`: the longest decimal prefix wins and
//! anything unparseable becomes NaN instead of an error.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::formulas::FormulaVersion;

/// Parse the longest leading decimal literal of `text`.
/// Rules:
/// - leading whitespace is skipped
/// - optional sign, then `Infinity` or digits with optional fraction/exponent
/// - trailing garbage is ignored ("12px" -> 12.0)
/// - no digits at all -> NaN
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        // A lone "." only counts when digits precede it ("1." is 1).
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Coerce an arbitrary JSON value to f64.
/// - Number -> its value
/// - String -> `parse_float`
/// - single-element Array -> coerce the element (matches string conversion of `[x]`)
/// - everything else -> NaN
pub fn coerce_json(v: &Value) -> f64 {
    match v {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_float(s),
        Value::Array(items) if items.len() == 1 => coerce_json(&items[0]),
        _ => f64::NAN,
    }
}

/// `deserialize_with` helper: accept any JSON and coerce it to f64.
pub fn deserialize_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(coerce_json(&v))
}

/// `deserialize_with` helper for optional knobs: `null` stays unset, anything
/// else is coerced (and may become NaN).
pub fn deserialize_optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(match v {
        None | Some(Value::Null) => None,
        Some(other) => Some(coerce_json(&other)),
    })
}

/// Version tag from loose JSON. Integral numbers (`7`, `7.0`) select by tag;
/// strings, fractions and other shapes take the fallback set.
pub fn coerce_version(v: &Value) -> i64 {
    let fallback = FormulaVersion::FALLBACK.tag();
    match v {
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(tag), _) => tag,
            (None, Some(f)) if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 => f as i64,
            _ => fallback,
        },
        _ => fallback,
    }
}

/// Mode name from loose JSON. Numbers become their decimal text, so they
/// reach the calculator as an unknown mode rather than a parse error.
pub fn coerce_mode(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_f64().map(|f| f.to_string()),
        _ => None,
    }
}

/// `deserialize_with` helper for the version tag.
pub fn deserialize_version<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(coerce_version(&v))
}

/// `deserialize_with` helper for the mode: `null` means no mode.
pub fn deserialize_mode<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(coerce_mode(&v))
}
