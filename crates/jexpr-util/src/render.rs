//! Scalar rendering rules used by `strConcat`: null renders as empty,
//! numbers and booleans render as their JSON scalar form, strings render
//! as-is, and arrays/objects render as their canonical JSON serialization.

use jexpr_types::Value;

pub fn render_for_concat(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other @ (Value::Array(_) | Value::Object(_)) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_renders_empty() {
        assert_eq!(render_for_concat(&json!(null)), "");
    }

    #[test]
    fn scalars_render_plainly() {
        assert_eq!(render_for_concat(&json!(42)), "42");
        assert_eq!(render_for_concat(&json!(true)), "true");
        assert_eq!(render_for_concat(&json!("hi")), "hi");
    }

    #[test]
    fn structures_render_as_canonical_json() {
        assert_eq!(render_for_concat(&json!([1, 2])), "[1,2]");
        assert_eq!(render_for_concat(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
