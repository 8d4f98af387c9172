//! The dispatcher (§4.1) and the tail-call trampoline (§4.6).
//!
//! Three constructs occupy tail position: the chosen branch of `if`, the
//! body of `let`, and the lambda-body rewrite performed by `call`. The loop
//! below mutates its local `expr`/`ctx` for all three instead of recursing,
//! so a self-recursive lambda invoked through `call` runs in constant native
//! stack regardless of how many times it recurses. Every other construct —
//! operator arguments, array/object literal elements, higher-order lambda
//! invocations — recurses normally into `evaluate`, which is safe because
//! those recursions are bounded by the script's own nesting depth, not by
//! the interpreted program's recursion depth.

use crate::binding::{bind_call_args, normalize_let_bindings};
use crate::context::{EvalContext, HookAction};
use crate::operators::{self, Operator};
use jexpr_types::{JexprError, JexprResult, Value};
use jexpr_util::array_wrapper;

enum Dispatch {
    Scalar(Value),
    Empty,
    ArrayWrapperLiteral(Vec<Value>),
    ObjectLiteral(serde_json::Map<String, Value>),
    LiteralSequence(Vec<Value>),
    UnknownOperator(String),
    OperatorCall(Operator, Vec<Value>),
}

/// Classifies `expr` per the seven ordered rules of §4.1. Takes `ctx` only
/// to read the configured array key.
fn classify(expr: Value, ctx: &EvalContext) -> Dispatch {
    match expr {
        // Rule 1: not a sequence and not a mapping.
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Dispatch::Scalar(expr),
        Value::Object(map) => {
            // Rule 2: the sole-key array-wrapper form.
            if map.len() == 1
                && let Some(items) = map.get(ctx.array_key()).and_then(|v| v.as_array())
            {
                return Dispatch::ArrayWrapperLiteral(items.clone());
            }
            // Rule 3: any other mapping shape, order preserved as-is.
            Dispatch::ObjectLiteral(map)
        }
        Value::Array(items) => {
            if items.is_empty() {
                // Rule 7: empty sequence.
                return Dispatch::Empty;
            }
            match items.first() {
                Some(Value::String(name)) => {
                    // Rule 4/5: first element is a string.
                    let rest = items[1..].to_vec();
                    match Operator::from_name(name) {
                        Some(op) => Dispatch::OperatorCall(op, rest),
                        None => Dispatch::UnknownOperator(name.clone()),
                    }
                }
                // Rule 6: first element is not a string.
                _ => Dispatch::LiteralSequence(items),
            }
        }
    }
}

/// Evaluates every element of a literal sequence/object non-tail, in order.
fn eval_each(items: Vec<Value>, ctx: &EvalContext) -> JexprResult<Vec<Value>> {
    items.into_iter().enumerate().map(|(i, item)| evaluate(item, ctx.with_path(i.to_string()))).collect()
}

/// The recursive evaluation step, exposed for advanced hosts per §4.8.
/// Implemented as an explicit loop so `if`, `let`, and `call` run in
/// constant native stack (§4.6).
pub fn evaluate(mut expr: Value, mut ctx: EvalContext) -> JexprResult<Value> {
    // The path depth this call started at. Tail rewrites (`let`, `call`)
    // truncate back to this depth before descending again, so a long
    // tail-recursive loop reuses one diagnostic frame per iteration instead
    // of growing `ctx.path` by one segment per recursion (§5).
    let base_depth = ctx.path().len();
    loop {
        match classify(expr, &ctx) {
            Dispatch::Scalar(v) => return Ok(v),
            Dispatch::Empty => return Ok(Value::Array(Vec::new())),
            Dispatch::ArrayWrapperLiteral(items) => {
                let evaluated = eval_each(items, &ctx)?;
                return Ok(array_wrapper::wrap(evaluated, ctx.array_key()));
            }
            Dispatch::ObjectLiteral(map) => {
                let mut out = serde_json::Map::new();
                for (key, value) in map {
                    let evaluated = evaluate(value, ctx.with_path(key.clone()))?;
                    out.insert(key, evaluated);
                }
                return Ok(Value::Object(out));
            }
            Dispatch::LiteralSequence(items) => {
                return Ok(Value::Array(eval_each(items, &ctx)?));
            }
            Dispatch::UnknownOperator(name) => {
                return Err(JexprError::unknown_operator(name, ctx.path_string()));
            }
            Dispatch::OperatorCall(op, args) => {
                tracing::trace!(operator = op.canonical_name(), path = %ctx.path_string(), "dispatching operator");
                if let HookAction::Abort(message) = ctx.fire_debug_hook(Some(op.canonical_name()), &Value::Null) {
                    return Err(JexprError::invalid_argument(format!("aborted by debug hook: {message}"), ctx.path_string()));
                }
                match op {
                    Operator::If => {
                        let [cond, then_branch, else_branch] = require_three(args, "if", &ctx)?;
                        let cond = evaluate(cond, ctx.with_path("if/cond"))?;
                        let branch = if jexpr_util::truthiness::is_truthy(&cond) { then_branch } else { else_branch };
                        expr = branch;
                        continue;
                    }
                    Operator::Let => {
                        let mut args = args.into_iter();
                        let bindings_expr = args.next().ok_or_else(|| {
                            JexprError::invalid_argument("'let' requires bindings and a body", ctx.path_string())
                        })?;
                        let body = args.next().ok_or_else(|| {
                            JexprError::invalid_argument("'let' requires bindings and a body", ctx.path_string())
                        })?;
                        if args.next().is_some() {
                            return Err(JexprError::invalid_argument("'let' takes exactly two arguments", ctx.path_string()));
                        }
                        let pairs = normalize_let_bindings(bindings_expr, &ctx)?;
                        // All value expressions evaluate in the enclosing scope and are
                        // added simultaneously: no intra-binding visibility.
                        let mut evaluated = Vec::with_capacity(pairs.len());
                        for (name, value_expr) in pairs {
                            let value = evaluate(value_expr, ctx.with_path(format!("let/{name}")))?;
                            evaluated.push((name, value));
                        }
                        ctx = ctx.with_bindings(evaluated).with_tail_path(base_depth, "let/body");
                        expr = body;
                        continue;
                    }
                    Operator::Call => {
                        let mut args = args.into_iter();
                        let lambda_expr = args
                            .next()
                            .ok_or_else(|| JexprError::invalid_argument("'call' requires a lambda and arguments", ctx.path_string()))?;
                        let lambda_value = evaluate(lambda_expr, ctx.with_path("call/target"))?;
                        let call_args = eval_each(args.collect(), &ctx.with_path("call/args"))?;
                        let (bindings, body) = bind_call_args(&lambda_value, call_args, &ctx)?;
                        ctx = ctx.with_bindings(bindings).with_tail_path(base_depth, "call/body");
                        expr = body;
                        continue;
                    }
                    _ => return operators::dispatch(op, args, &ctx),
                }
            }
        }
    }
}

fn require_three(args: Vec<Value>, op_name: &str, ctx: &EvalContext) -> JexprResult<[Value; 3]> {
    let len = args.len();
    args.try_into().map_err(|_| JexprError::invalid_argument(format!("'{op_name}' requires exactly 3 arguments, got {len}"), ctx.path_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jexpr_types::ExecuteOptions;
    use serde_json::json;

    fn ctx() -> EvalContext {
        EvalContext::new(vec![Value::Null], ExecuteOptions::default())
    }

    #[test]
    fn scalar_literal_passes_through() {
        assert_eq!(evaluate(json!(42), ctx()).unwrap(), json!(42));
        assert_eq!(evaluate(json!("hi"), ctx()).unwrap(), json!("hi"));
        assert_eq!(evaluate(json!(null), ctx()).unwrap(), json!(null));
    }

    #[test]
    fn literal_array_wrapper_evaluates_elements() {
        let script = json!({"array": [["+", 1, 1], 2]});
        assert_eq!(evaluate(script, ctx()).unwrap(), json!({"array": [2, 2]}));
    }

    #[test]
    fn plain_object_recurses_preserving_keys() {
        let script = json!({"a": ["+", 1, 1], "b": 3});
        assert_eq!(evaluate(script, ctx()).unwrap(), json!({"a": 2, "b": 3}));
    }

    #[test]
    fn literal_sequence_with_non_string_head_recurses() {
        let script = json!([1, ["+", 1, 1], 3]);
        assert_eq!(evaluate(script, ctx()).unwrap(), json!([1, 2, 3]));
    }

    #[test]
    fn empty_sequence_is_itself() {
        assert_eq!(evaluate(json!([]), ctx()).unwrap(), json!([]));
    }

    #[test]
    fn unknown_operator_errors() {
        let err = evaluate(json!(["nope", 1]), ctx()).unwrap_err();
        assert!(matches!(err, JexprError::UnknownOperator { .. }));
    }

    #[test]
    fn if_takes_tail_branch_only() {
        let script = json!(["if", true, ["+", 1, 1], ["nope"]]);
        assert_eq!(evaluate(script, ctx()).unwrap(), json!(2));
    }

    #[test]
    fn deep_if_let_chain_does_not_overflow_native_stack() {
        let mut script = json!(1);
        for _ in 0..100 {
            script = json!(["let", [["x", script]], ["if", true, ["$", "/x"], 0]]);
        }
        assert_eq!(evaluate(script, ctx()).unwrap(), json!(1));
    }

    #[test]
    fn tail_recursive_call_does_not_grow_the_diagnostic_path() {
        // A long `call` loop is tail position (§4.6); the path it leaves
        // behind must stay bounded by this call's own nesting, not by how
        // many times the lambda recursed (§5: appended on descent, popped on
        // ascent — a tail rewrite is an ascent-then-descend, not a descent).
        let script = json!([
            "let",
            [["step", ["lambda", ["n"],
                ["if", ["<=", ["$", "/n"], 0],
                    ["nope"],
                    ["call", ["$", "/step"], ["-", ["$", "/n"], 1]]
                ]
            ]]],
            ["call", ["$", "/step"], 500]
        ]);
        let err = evaluate(script, ctx()).unwrap_err();
        let JexprError::UnknownOperator { path, .. } = err else { panic!("expected UnknownOperator, got {err:?}") };
        assert!(path.matches('/').count() < 10, "path grew with recursion depth: {path}");
    }
}
