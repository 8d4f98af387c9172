//! `obj get merge keys values` (§4.4).

use crate::context::EvalContext;
use crate::dispatch::evaluate;
use crate::operators::eval_args;
use jexpr_types::{JexprError, JexprResult, Value};
use jexpr_util::pointer;

/// `obj` accepts either `[keyExpr, valueExpr]` pairs or flat alternating
/// `key, value` arguments. Since arguments arrive unevaluated, the two
/// shapes are told apart structurally before anything is evaluated: if
/// every argument is itself a two-element sequence, it is treated as a
/// pair; otherwise the arguments are read two at a time.
pub fn obj(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let pairs_mode = !args.is_empty() && args.iter().all(|a| matches!(a, Value::Array(items) if items.len() == 2));

    let mut entries: Vec<(Value, Value)> = Vec::new();
    if pairs_mode {
        for (i, arg) in args.into_iter().enumerate() {
            let Value::Array(mut pair) = arg else { unreachable!() };
            let value_expr = pair.pop().unwrap();
            let key_expr = pair.pop().unwrap();
            let key = evaluate(key_expr, ctx.with_path(format!("obj/{i}/key")))?;
            let value = evaluate(value_expr, ctx.with_path(format!("obj/{i}/value")))?;
            entries.push((key, value));
        }
    } else {
        if args.len() % 2 != 0 {
            return Err(JexprError::invalid_argument("'obj' flat form requires an even number of arguments", ctx.path_string()));
        }
        let mut pairs = args.into_iter().enumerate();
        while let Some((i, key_expr)) = pairs.next() {
            let (_, value_expr) = pairs.next().unwrap();
            let key = evaluate(key_expr, ctx.with_path(format!("obj/{i}/key")))?;
            let value = evaluate(value_expr, ctx.with_path(format!("obj/{i}/value")))?;
            entries.push((key, value));
        }
    }

    let mut map = serde_json::Map::new();
    for (key, value) in entries {
        let key = key.as_str().ok_or_else(|| JexprError::invalid_argument("'obj' key must evaluate to a string", ctx.path_string()))?;
        map.insert(key.to_string(), value);
    }
    Ok(Value::Object(map))
}

pub fn get(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let values = eval_args(args, ctx)?;
    let [object, pointer_value]: [Value; 2] =
        values.try_into().map_err(|_| JexprError::invalid_argument("'get' requires exactly 2 arguments", ctx.path_string()))?;
    let pointer_str = pointer_value.as_str().ok_or_else(|| JexprError::invalid_argument("'get' pointer must be a string", ctx.path_string()))?;
    pointer::navigate_pointer(&object, pointer_str)
        .cloned()
        .map_err(|message| JexprError::invalid_argument(message, ctx.path_string()))
}

/// Shallow, right-biased union: later operands overwrite earlier keys.
pub fn merge(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let values = eval_args(args, ctx)?;
    let mut result = serde_json::Map::new();
    for value in &values {
        let map = value.as_object().ok_or_else(|| JexprError::invalid_argument("'merge' operands must be mappings", ctx.path_string()))?;
        for (k, v) in map {
            result.insert(k.clone(), v.clone());
        }
    }
    Ok(Value::Object(result))
}

pub fn keys(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let values = eval_args(args, ctx)?;
    let [value]: [Value; 1] = values.try_into().map_err(|_| JexprError::invalid_argument("'keys' requires exactly 1 argument", ctx.path_string()))?;
    let map = value.as_object().ok_or_else(|| JexprError::invalid_argument("'keys' argument must be a mapping", ctx.path_string()))?;
    Ok(Value::Array(map.keys().map(|k| Value::String(k.clone())).collect()))
}

pub fn values(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let evaluated = eval_args(args, ctx)?;
    let [value]: [Value; 1] =
        evaluated.try_into().map_err(|_| JexprError::invalid_argument("'values' requires exactly 1 argument", ctx.path_string()))?;
    let map = value.as_object().ok_or_else(|| JexprError::invalid_argument("'values' argument must be a mapping", ctx.path_string()))?;
    Ok(Value::Array(map.values().cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jexpr_types::ExecuteOptions;
    use serde_json::json;

    fn ctx() -> EvalContext {
        EvalContext::new(vec![], ExecuteOptions::default())
    }

    #[test]
    fn obj_pairs_mode() {
        let script = vec![json!(["a", 1]), json!(["b", 2])];
        assert_eq!(obj(script, &ctx()).unwrap(), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn obj_flat_mode() {
        let script = vec![json!("a"), json!(1), json!("b"), json!(2)];
        assert_eq!(obj(script, &ctx()).unwrap(), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn get_performs_pointer_lookup() {
        assert_eq!(get(vec![json!({"a": {"b": 1}}), json!("/a/b")], &ctx()).unwrap(), json!(1));
    }

    #[test]
    fn merge_is_right_biased() {
        assert_eq!(merge(vec![json!({"a": 1}), json!({"a": 2, "b": 3})], &ctx()).unwrap(), json!({"a": 2, "b": 3}));
    }

    #[test]
    fn keys_and_values_preserve_order() {
        let value = json!({"b": 2, "a": 1});
        assert_eq!(keys(vec![value.clone()], &ctx()).unwrap(), json!(["b", "a"]));
        assert_eq!(values(vec![value], &ctx()).unwrap(), json!([2, 1]));
    }
}
