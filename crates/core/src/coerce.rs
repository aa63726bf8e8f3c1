//! Permissive field-coercion policy for register payloads.
//!
//! Register clients send loosely-typed JSON: numeric fields may arrive as
//! numbers or numeric-looking strings, optional text may be absent, and
//! line-item lists may be shorter than the particulars list. This module is
//! the single place that defines those rules; callers must not coerce
//! ad-hoc.
//!
//! | input                          | result          |
//! |--------------------------------|-----------------|
//! | JSON number                    | its f64 value   |
//! | string parseable as f64 (trim) | parsed value    |
//! | any other / missing value      | 0.0             |
//! | missing optional text          | `""`            |
//! | list shorter than particulars  | zero-filled     |

use serde_json::Value;

/// Coerce a JSON value to a number, treating anything non-numeric as zero.
pub fn numeric_or_zero(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Missing optional text becomes the empty string.
pub fn text_or_empty(value: Option<&str>) -> String {
    value.unwrap_or("").to_string()
}
