//! The `{ <arrayKey>: [...] }` literal-array wrapper convention (§4.5).
//!
//! The wrapper exists purely to disambiguate literal arrays from operator
//! calls in source text; once a value exists at runtime there is no such
//! ambiguity, so every operator that conceptually takes or returns an array
//! accepts (and, where noted, unwraps) both the bare and the wrapped form.

use jexpr_types::Value;

/// If `value` is an object whose sole key is `array_key` mapping to an
/// array, returns that array. Recognized anywhere a value is produced, not
/// only in source text — a dynamically built `{"array": [...]}` object is
/// just as much a wrapper as a literal one.
pub fn as_wrapped_array(value: &Value, array_key: &str) -> Option<&Vec<Value>> {
    let map = value.as_object()?;
    if map.len() != 1 {
        return None;
    }
    map.get(array_key)?.as_array()
}

/// Accepts either a bare array or a wrapped array; returns the element
/// slice either way. This is what array/list operators should call on
/// their operand.
pub fn as_array_like<'a>(value: &'a Value, array_key: &str) -> Option<&'a Vec<Value>> {
    value.as_array().or_else(|| as_wrapped_array(value, array_key))
}

/// Builds a wrapped-array value.
pub fn wrap(items: Vec<Value>, array_key: &str) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(array_key.to_string(), Value::Array(items));
    Value::Object(map)
}

/// If `value` is wrapped, returns the bare array form; otherwise returns
/// `value` unchanged. Operators emit bare arrays to downstream consumers
/// per §4.5 ("must emit the unwrapped sequence form when its result is
/// itself consumed downstream").
pub fn unwrap(value: Value, array_key: &str) -> Value {
    match as_wrapped_array(&value, array_key) {
        Some(items) => Value::Array(items.clone()),
        None => value,
    }
}
