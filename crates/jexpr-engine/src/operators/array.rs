//! `car cdr cons append count` and the higher-order operators `map filter
//! reduce find some every flatMap partition zip zipWith reverse unique chunk
//! flatten` (§4.3, §4.4).

use crate::context::EvalContext;
use crate::dispatch::evaluate;
use jexpr_types::{lambda, JexprError, JexprResult, Value};
use jexpr_util::array_wrapper;
use jexpr_util::equality::values_equal;

fn eval_array(expr: Value, ctx: &EvalContext) -> JexprResult<Vec<Value>> {
    let value = evaluate(expr, ctx.clone())?;
    array_wrapper::as_array_like(&value, ctx.array_key()).cloned().ok_or_else(|| JexprError::invalid_argument("expected an array", ctx.path_string()))
}

/// Invokes a lambda value against the logical arguments supplied by an
/// operator (§4.3). A single-parameter lambda receiving more than one
/// logical argument (the `reduce`/`zipWith` `[acc, item]` convention) is
/// bound to the whole sequence as one value; otherwise arity must match
/// exactly.
fn invoke(lambda_value: &Value, logical_args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let (params, body) = lambda::lambda_parts(lambda_value).ok_or_else(|| JexprError::invalid_argument("expected a lambda", ctx.path_string()))?;
    let bindings: Vec<(String, Value)> = if params.len() == logical_args.len() {
        params.into_iter().zip(logical_args).collect()
    } else if params.len() == 1 && logical_args.len() > 1 {
        vec![(params.into_iter().next().unwrap(), Value::Array(logical_args))]
    } else {
        return Err(JexprError::invalid_argument(
            format!("lambda expects {} argument(s), got {}", params.len(), logical_args.len()),
            ctx.path_string(),
        ));
    };
    evaluate(body.clone(), ctx.with_bindings(bindings).with_path("lambda"))
}

fn eval_lambda_arg(expr: Value, ctx: &EvalContext) -> JexprResult<Value> {
    evaluate(expr, ctx.with_path("lambda-arg"))
}

pub fn car(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr]: [Value; 1] = args.try_into().map_err(|_| JexprError::invalid_argument("'car' requires exactly 1 argument", ctx.path_string()))?;
    let items = eval_array(array_expr, ctx)?;
    items.into_iter().next().ok_or_else(|| JexprError::invalid_argument("'car' of an empty array", ctx.path_string()))
}

pub fn cdr(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr]: [Value; 1] = args.try_into().map_err(|_| JexprError::invalid_argument("'cdr' requires exactly 1 argument", ctx.path_string()))?;
    let mut items = eval_array(array_expr, ctx)?;
    if items.is_empty() {
        return Err(JexprError::invalid_argument("'cdr' of an empty array", ctx.path_string()));
    }
    items.remove(0);
    Ok(Value::Array(items))
}

pub fn cons(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [item_expr, array_expr]: [Value; 2] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'cons' requires exactly 2 arguments", ctx.path_string()))?;
    let item = evaluate(item_expr, ctx.with_path("cons/item"))?;
    let mut items = eval_array(array_expr, ctx)?;
    items.insert(0, item);
    Ok(Value::Array(items))
}

pub fn append(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let mut result = Vec::new();
    for (i, arg) in args.into_iter().enumerate() {
        result.extend(eval_array(arg, &ctx.with_path(format!("append/{i}")))?);
    }
    Ok(Value::Array(result))
}

pub fn count(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr]: [Value; 1] = args.try_into().map_err(|_| JexprError::invalid_argument("'count' requires exactly 1 argument", ctx.path_string()))?;
    let items = eval_array(array_expr, ctx)?;
    Ok(Value::from(items.len() as u64))
}

pub fn map(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr, lambda_expr]: [Value; 2] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'map' requires exactly 2 arguments", ctx.path_string()))?;
    let items = eval_array(array_expr, ctx)?;
    let lambda_value = eval_lambda_arg(lambda_expr, ctx)?;
    let mapped = items.into_iter().map(|item| invoke(&lambda_value, vec![item], ctx)).collect::<JexprResult<Vec<_>>>()?;
    Ok(Value::Array(mapped))
}

pub fn filter(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr, lambda_expr]: [Value; 2] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'filter' requires exactly 2 arguments", ctx.path_string()))?;
    let items = eval_array(array_expr, ctx)?;
    let lambda_value = eval_lambda_arg(lambda_expr, ctx)?;
    let mut kept = Vec::new();
    for item in items {
        if jexpr_util::truthiness::is_truthy(&invoke(&lambda_value, vec![item.clone()], ctx)?) {
            kept.push(item);
        }
    }
    Ok(Value::Array(kept))
}

pub fn reduce(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr, lambda_expr, init_expr]: [Value; 3] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'reduce' requires exactly 3 arguments", ctx.path_string()))?;
    let items = eval_array(array_expr, ctx)?;
    let lambda_value = eval_lambda_arg(lambda_expr, ctx)?;
    let mut acc = evaluate(init_expr, ctx.with_path("reduce/init"))?;
    for item in items {
        acc = invoke(&lambda_value, vec![acc, item], ctx)?;
    }
    Ok(acc)
}

pub fn find(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr, lambda_expr]: [Value; 2] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'find' requires exactly 2 arguments", ctx.path_string()))?;
    let items = eval_array(array_expr, ctx)?;
    let lambda_value = eval_lambda_arg(lambda_expr, ctx)?;
    for item in items {
        if jexpr_util::truthiness::is_truthy(&invoke(&lambda_value, vec![item.clone()], ctx)?) {
            return Ok(item);
        }
    }
    Ok(Value::Null)
}

pub fn some(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr, lambda_expr]: [Value; 2] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'some' requires exactly 2 arguments", ctx.path_string()))?;
    let items = eval_array(array_expr, ctx)?;
    let lambda_value = eval_lambda_arg(lambda_expr, ctx)?;
    for item in items {
        if jexpr_util::truthiness::is_truthy(&invoke(&lambda_value, vec![item], ctx)?) {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}

pub fn every(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr, lambda_expr]: [Value; 2] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'every' requires exactly 2 arguments", ctx.path_string()))?;
    let items = eval_array(array_expr, ctx)?;
    let lambda_value = eval_lambda_arg(lambda_expr, ctx)?;
    for item in items {
        if !jexpr_util::truthiness::is_truthy(&invoke(&lambda_value, vec![item], ctx)?) {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

pub fn flat_map(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr, lambda_expr]: [Value; 2] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'flatMap' requires exactly 2 arguments", ctx.path_string()))?;
    let items = eval_array(array_expr, ctx)?;
    let lambda_value = eval_lambda_arg(lambda_expr, ctx)?;
    let mut result = Vec::new();
    for item in items {
        let mapped = invoke(&lambda_value, vec![item], ctx)?;
        match array_wrapper::as_array_like(&mapped, ctx.array_key()) {
            Some(items) => result.extend(items.iter().cloned()),
            None => result.push(mapped),
        }
    }
    Ok(Value::Array(result))
}

pub fn partition(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr, lambda_expr]: [Value; 2] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'partition' requires exactly 2 arguments", ctx.path_string()))?;
    let items = eval_array(array_expr, ctx)?;
    let lambda_value = eval_lambda_arg(lambda_expr, ctx)?;
    let mut truthy = Vec::new();
    let mut falsy = Vec::new();
    for item in items {
        if jexpr_util::truthiness::is_truthy(&invoke(&lambda_value, vec![item.clone()], ctx)?) {
            truthy.push(item);
        } else {
            falsy.push(item);
        }
    }
    Ok(Value::Array(vec![Value::Array(truthy), Value::Array(falsy)]))
}

pub fn zip(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    if args.len() < 2 {
        return Err(JexprError::invalid_argument("'zip' requires at least 2 arrays", ctx.path_string()));
    }
    let arrays = args
        .into_iter()
        .enumerate()
        .map(|(i, arg)| eval_array(arg, &ctx.with_path(format!("zip/{i}"))))
        .collect::<JexprResult<Vec<_>>>()?;
    let min_len = arrays.iter().map(Vec::len).min().unwrap_or(0);
    let mut result = Vec::with_capacity(min_len);
    for i in 0..min_len {
        result.push(Value::Array(arrays.iter().map(|a| a[i].clone()).collect()));
    }
    Ok(Value::Array(result))
}

pub fn zip_with(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [left_expr, right_expr, lambda_expr]: [Value; 3] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'zipWith' requires exactly 3 arguments", ctx.path_string()))?;
    let left = eval_array(left_expr, ctx)?;
    let right = eval_array(right_expr, ctx)?;
    let lambda_value = eval_lambda_arg(lambda_expr, ctx)?;
    let min_len = left.len().min(right.len());
    let mut result = Vec::with_capacity(min_len);
    for (a, b) in left.into_iter().zip(right).take(min_len) {
        result.push(invoke(&lambda_value, vec![a, b], ctx)?);
    }
    Ok(Value::Array(result))
}

pub fn reverse(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr]: [Value; 1] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'reverse' requires exactly 1 argument", ctx.path_string()))?;
    let mut items = eval_array(array_expr, ctx)?;
    items.reverse();
    Ok(Value::Array(items))
}

/// First occurrence wins; equality is structural (§4.4).
pub fn unique(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr]: [Value; 1] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'unique' requires exactly 1 argument", ctx.path_string()))?;
    let items = eval_array(array_expr, ctx)?;
    let mut result: Vec<Value> = Vec::new();
    for item in items {
        if !result.iter().any(|seen| values_equal(seen, &item)) {
            result.push(item);
        }
    }
    Ok(Value::Array(result))
}

pub fn chunk(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr, size_expr]: [Value; 2] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'chunk' requires exactly 2 arguments", ctx.path_string()))?;
    let items = eval_array(array_expr, ctx)?;
    let size_value = evaluate(size_expr, ctx.with_path("chunk/size"))?;
    let size = size_value.as_u64().filter(|n| *n > 0).ok_or_else(|| JexprError::invalid_argument("'chunk' size must be a positive integer", ctx.path_string()))?
        as usize;
    Ok(Value::Array(items.chunks(size).map(|c| Value::Array(c.to_vec())).collect()))
}

/// Flattens one level: array-like elements are spliced in; anything else is
/// kept as-is.
pub fn flatten(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [array_expr]: [Value; 1] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'flatten' requires exactly 1 argument", ctx.path_string()))?;
    let items = eval_array(array_expr, ctx)?;
    let mut result = Vec::new();
    for item in items {
        match array_wrapper::as_array_like(&item, ctx.array_key()) {
            Some(inner) => result.extend(inner.iter().cloned()),
            None => result.push(item),
        }
    }
    Ok(Value::Array(result))
}
