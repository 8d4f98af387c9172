//! Recognition helpers for the lambda value form.
//!
//! A lambda is a plain `Value::Array` of length 3: `["lambda", [params...], body]`.
//! It closes over no environment — a stored lambda is only as good as the
//! bindings visible wherever it is later invoked (see design note on closure
//! capture; this is intentional, not a bug).

use serde_json::Value;

pub const LAMBDA_TAG: &str = "lambda";

/// True if `value` has the shape `["lambda", [..strings..], body]`.
pub fn is_lambda(value: &Value) -> bool {
    lambda_parts(value).is_some()
}

/// Splits a lambda value into its parameter names and body, if it is shaped
/// like a lambda. Returns `None` for anything else (including malformed
/// three-element arrays whose second element isn't an all-string array).
pub fn lambda_parts(value: &Value) -> Option<(Vec<String>, &Value)> {
    let array = value.as_array()?;
    let [tag, params, body] = array.as_slice() else {
        return None;
    };
    if tag.as_str() != Some(LAMBDA_TAG) {
        return None;
    }
    let params = params.as_array()?;
    let params = params.iter().map(|p| p.as_str().map(str::to_string)).collect::<Option<Vec<_>>>()?;
    Some((params, body))
}
