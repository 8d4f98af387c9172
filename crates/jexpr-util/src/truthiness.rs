//! Truthiness: a total predicate on values.
//!
//! Falsy: `false`, `null`, `0` (integer or float), empty string, empty array,
//! empty object. Everything else is truthy.

use jexpr_types::Value;

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
