//! Lenient request-body access.
//!
//! Bodies are never rejected: a missing, non-JSON or oddly-typed payload reads
//! as "field absent" and the caller substitutes its default.

use chrono::NaiveDate;
use serde_json::Value;

/// Parse raw body bytes, yielding `Value::Null` for anything that is not JSON.
pub fn lenient_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or(Value::Null)
}

/// Non-blank string field. Numbers are accepted and rendered as text.
pub fn text_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Finite numeric field. Numeric strings (`"120"`) are accepted.
pub fn number_field(body: &Value, key: &str) -> Option<f64> {
    let n = match body.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    Some(n).filter(|n| n.is_finite())
}

/// Calendar date field in `YYYY-MM-DD` form, normalized. Anything else is absent.
pub fn date_field(body: &Value, key: &str) -> Option<String> {
    let raw = body.get(key)?.as_str()?.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}
