//! Normalization helpers for the two binding forms (`let`, `call`) that the
//! trampoline in `dispatch.rs` handles directly.

use crate::context::EvalContext;
use jexpr_types::{lambda, JexprError, JexprResult, Value};

/// Accepts either binding shape named in §4.3 and returns the bindings as
/// `(name, unevaluated expression)` pairs in source order:
///
/// - a sequence of `[name, expr]` pairs: `[["x", 1], ["y", 2]]`
/// - a mapping form: `{"x": 1, "y": 2}`
///
/// Values are left unevaluated; the trampoline evaluates each in the
/// enclosing scope before extending it.
pub fn normalize_let_bindings(bindings_expr: Value, ctx: &EvalContext) -> JexprResult<Vec<(String, Value)>> {
    match bindings_expr {
        Value::Array(pairs) => pairs
            .into_iter()
            .map(|pair| {
                let Value::Array(mut pair) = pair else {
                    return Err(JexprError::invalid_argument("each 'let' binding must be a [name, expr] pair", ctx.path_string()));
                };
                if pair.len() != 2 {
                    return Err(JexprError::invalid_argument("each 'let' binding must be a [name, expr] pair", ctx.path_string()));
                }
                let value = pair.pop().unwrap();
                let name = pair.pop().unwrap();
                let name = name.as_str().ok_or_else(|| {
                    JexprError::invalid_argument("'let' binding name must be a string", ctx.path_string())
                })?;
                Ok((name.to_string(), value))
            })
            .collect(),
        Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Err(JexprError::invalid_argument("'let' bindings must be a sequence of pairs or a mapping", ctx.path_string())),
    }
}

/// Binds `args` (already evaluated) to `lambda_value`'s parameters and
/// returns the new bindings plus the lambda's body, ready for the trampoline
/// to evaluate in tail position. Arity must match exactly.
pub fn bind_call_args(lambda_value: &Value, args: Vec<Value>, ctx: &EvalContext) -> JexprResult<(Vec<(String, Value)>, Value)> {
    let (params, body) = lambda::lambda_parts(lambda_value)
        .ok_or_else(|| JexprError::invalid_argument("'call' target is not a lambda", ctx.path_string()))?;
    if params.len() != args.len() {
        return Err(JexprError::invalid_argument(
            format!("lambda expects {} argument(s), got {}", params.len(), args.len()),
            ctx.path_string(),
        ));
    }
    let bindings = params.into_iter().zip(args).collect();
    Ok((bindings, body.clone()))
}
