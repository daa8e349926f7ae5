//! Presence checks and numeric coercion for client submissions
//!
//! Fields count as absent when they are missing, `null`, blank, `false` or
//! the number zero. Numeric fields may arrive as JSON numbers or numeric
//! strings.

use serde_json::Value;

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const INVALID_NUMERIC_FIELDS: &str = "Invalid numeric fields";

/// Keep a text value only if it has non-whitespace content
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Whether a numeric field was supplied at all
pub fn numeric_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true,
    }
}

/// Coerce a JSON number or numeric string to a whole number.
///
/// Fractions, non-finite values and anything that is not a number or string
/// yield `None`.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
        }
        _ => None,
    }
}

fn whole(f: f64) -> Option<i64> {
    // Stay inside the range where f64 represents every integer exactly
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    (f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_EXACT).then_some(f as i64)
}
