//! Field-level helpers over opaque JSON values.

use serde_json::Value;

use super::RenderOptions;

/// Placeholder printed when a mandatory field is absent.
pub const MISSING: &str = "unknown";

/// JSON truthiness: null, false, 0, NaN and "" are falsy; arrays and objects
/// are always truthy.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Human form of a value: strings unquoted, everything else as JSON text.
pub fn display(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `display` of `item[key]`, or [`MISSING`].
pub fn display_field(item: &Value, key: &str) -> String {
    item.get(key).map(display).unwrap_or_else(|| MISSING.to_string())
}

/// Length of an array field, `None` when absent or not an array.
pub fn len_of(item: &Value, key: &str) -> Option<usize> {
    item.get(key).and_then(Value::as_array).map(Vec::len)
}

/// Parse the leading integer of a string the way lenient number parsing does:
/// optional whitespace, optional sign, then digits up to the first non-digit.
/// `"12,500"` yields 12; `"unknown"` yields `None`.
pub fn int_prefix(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let (neg, rest) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let digits: &str = {
        let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    // Saturate instead of failing on absurdly long digit runs.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if neg { -magnitude } else { magnitude })
}

/// Integer reading of a field that may be a JSON string or number.
pub fn int_of(item: &Value, key: &str) -> Option<i64> {
    match item.get(key)? {
        Value::String(s) => int_prefix(s),
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        _ => None,
    }
}

/// Whether a value should be printed under `opts`.
pub fn is_shown(v: &Value, opts: RenderOptions) -> bool {
    if opts.hide_falsy {
        is_truthy(v)
    } else {
        !v.is_null()
    }
}
