//! Pointwise equality and ordering over JSON values.
//!
//! Numeric equality and ordering compare by numeric value, not by
//! int/float representation, so `1 == 1.0` and `1 < 1.5` both hold.

use jexpr_types::Value;
use std::cmp::Ordering;

pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Array(xs), Value::Array(ys)) => xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y)),
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len() && xs.iter().all(|(k, v)| ys.get(k).is_some_and(|w| values_equal(v, w)))
        }
        _ => a == b,
    }
}

/// Orders two values for `< > <= >=`. Numbers compare numerically, strings
/// lexicographically; any other pairing (including cross-type) is not
/// orderable and returns `None` so the caller can raise `InvalidArgument`.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn int_and_float_equal_by_value() {
        assert!(values_equal(&json!(1), &json!(1.0)));
    }

    #[test]
    fn arrays_compare_elementwise() {
        assert!(values_equal(&json!([1, 2.0, "x"]), &json!([1.0, 2, "x"])));
        assert!(!values_equal(&json!([1, 2]), &json!([1, 2, 3])));
    }

    #[test]
    fn objects_compare_by_key_regardless_of_order() {
        assert!(values_equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
    }

    #[test]
    fn string_ordering_is_lexicographic() {
        assert_eq!(compare_values(&json!("a"), &json!("b")), Some(Ordering::Less));
    }

    #[test]
    fn cross_type_ordering_is_none() {
        assert_eq!(compare_values(&json!(1), &json!("1")), None);
    }
}
