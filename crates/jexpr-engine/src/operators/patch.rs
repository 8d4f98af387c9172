//! Hand-rolled RFC 6902 JSON Patch `diff`/`patch` (§4.4). Kept in the core
//! operator catalogue rather than delegated to an external crate: unlike
//! `permuto.apply`, these are catalogue operators, not an out-of-scope
//! collaborator.

use crate::context::EvalContext;
use crate::operators::eval_args;
use jexpr_types::{JexprError, JexprResult, Value};
use jexpr_util::equality::values_equal;
use jexpr_util::pointer;

pub fn diff(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let values = eval_args(args, ctx)?;
    let [a, b]: [Value; 2] = values.try_into().map_err(|_| JexprError::invalid_argument("'diff' requires exactly 2 arguments", ctx.path_string()))?;
    let mut ops = Vec::new();
    diff_at("", &a, &b, &mut ops);
    Ok(Value::Array(ops))
}

fn escape(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Objects diff key-by-key at deeper paths; any other type mismatch (or
/// array difference) is emitted as a single `replace` at the current path.
/// This is not the minimal possible patch for arrays, but it is always
/// correct and round-trips through `patch`.
fn diff_at(path: &str, a: &Value, b: &Value, ops: &mut Vec<Value>) {
    if values_equal(a, b) {
        return;
    }
    match (a, b) {
        (Value::Object(am), Value::Object(bm)) => {
            for (key, a_value) in am {
                let child_path = format!("{path}/{}", escape(key));
                match bm.get(key) {
                    Some(b_value) => diff_at(&child_path, a_value, b_value, ops),
                    None => ops.push(serde_json::json!({"op": "remove", "path": child_path})),
                }
            }
            for (key, b_value) in bm {
                if !am.contains_key(key) {
                    let child_path = format!("{path}/{}", escape(key));
                    ops.push(serde_json::json!({"op": "add", "path": child_path, "value": b_value}));
                }
            }
        }
        _ => ops.push(serde_json::json!({"op": "replace", "path": path, "value": b})),
    }
}

pub fn patch(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let values = eval_args(args, ctx)?;
    let [doc, patch_ops]: [Value; 2] =
        values.try_into().map_err(|_| JexprError::invalid_argument("'patch' requires exactly 2 arguments", ctx.path_string()))?;
    let ops = patch_ops.as_array().ok_or_else(|| JexprError::patch_failed("patch document must be an array", ctx.path_string()))?.clone();
    let mut result = doc;
    for op in &ops {
        apply_one(&mut result, op, ctx)?;
    }
    Ok(result)
}

fn apply_one(doc: &mut Value, op: &Value, ctx: &EvalContext) -> JexprResult<()> {
    let obj = op.as_object().ok_or_else(|| JexprError::patch_failed("each patch operation must be an object", ctx.path_string()))?;
    let kind = obj.get("op").and_then(Value::as_str).ok_or_else(|| JexprError::patch_failed("patch operation missing 'op'", ctx.path_string()))?;
    let path = obj.get("path").and_then(Value::as_str).ok_or_else(|| JexprError::patch_failed("patch operation missing 'path'", ctx.path_string()))?;
    match kind {
        "add" | "replace" => {
            let value = obj.get("value").cloned().ok_or_else(|| JexprError::patch_failed(format!("'{kind}' requires 'value'"), ctx.path_string()))?;
            set_at(doc, path, value, ctx)
        }
        "remove" => remove_at(doc, path, ctx),
        "move" => {
            let from = obj.get("from").and_then(Value::as_str).ok_or_else(|| JexprError::patch_failed("'move' requires 'from'", ctx.path_string()))?;
            let value = get_at(doc, from, ctx)?;
            remove_at(doc, from, ctx)?;
            set_at(doc, path, value, ctx)
        }
        "copy" => {
            let from = obj.get("from").and_then(Value::as_str).ok_or_else(|| JexprError::patch_failed("'copy' requires 'from'", ctx.path_string()))?;
            let value = get_at(doc, from, ctx)?;
            set_at(doc, path, value, ctx)
        }
        "test" => {
            let expected = obj.get("value").cloned().ok_or_else(|| JexprError::patch_failed("'test' requires 'value'", ctx.path_string()))?;
            let actual = get_at(doc, path, ctx)?;
            if values_equal(&actual, &expected) {
                Ok(())
            } else {
                Err(JexprError::patch_failed(format!("test failed at {path}"), ctx.path_string()))
            }
        }
        other => Err(JexprError::patch_failed(format!("unsupported patch operation '{other}'"), ctx.path_string())),
    }
}

fn get_at(doc: &Value, path: &str, ctx: &EvalContext) -> JexprResult<Value> {
    pointer::navigate_pointer(doc, path).cloned().map_err(|message| JexprError::patch_failed(message, ctx.path_string()))
}

fn remove_at(doc: &mut Value, path: &str, ctx: &EvalContext) -> JexprResult<()> {
    let stripped = path.strip_prefix('/').unwrap_or(path);
    let mut segments = pointer::split_segments(stripped);
    let last = segments.pop().ok_or_else(|| JexprError::patch_failed("'remove' requires a non-root path", ctx.path_string()))?;
    let parent = navigate_mut(doc, &segments, ctx)?;
    match parent {
        Value::Object(map) => {
            map.remove(&last).ok_or_else(|| JexprError::patch_failed(format!("no such key '{last}'"), ctx.path_string()))?;
        }
        Value::Array(items) => {
            let index: usize = last.parse().map_err(|_| JexprError::patch_failed(format!("'{last}' is not a valid array index"), ctx.path_string()))?;
            if index >= items.len() {
                return Err(JexprError::patch_failed(format!("array index {index} out of range"), ctx.path_string()));
            }
            items.remove(index);
        }
        _ => return Err(JexprError::patch_failed("cannot remove from a scalar", ctx.path_string())),
    }
    Ok(())
}

fn set_at(doc: &mut Value, path: &str, value: Value, ctx: &EvalContext) -> JexprResult<()> {
    let stripped = path.strip_prefix('/').unwrap_or(path);
    let mut segments = pointer::split_segments(stripped);
    if segments.is_empty() {
        *doc = value;
        return Ok(());
    }
    let last = segments.pop().unwrap();
    let parent = navigate_mut(doc, &segments, ctx)?;
    match parent {
        Value::Object(map) => {
            map.insert(last, value);
        }
        Value::Array(items) => {
            if last == "-" {
                items.push(value);
            } else {
                let index: usize = last.parse().map_err(|_| JexprError::patch_failed(format!("'{last}' is not a valid array index"), ctx.path_string()))?;
                if index > items.len() {
                    return Err(JexprError::patch_failed(format!("array index {index} out of range"), ctx.path_string()));
                }
                items.insert(index, value);
            }
        }
        _ => return Err(JexprError::patch_failed("cannot set into a scalar", ctx.path_string())),
    }
    Ok(())
}

fn navigate_mut<'a>(doc: &'a mut Value, segments: &[String], ctx: &EvalContext) -> JexprResult<&'a mut Value> {
    let mut current = doc;
    for segment in segments {
        current = match current {
            Value::Object(map) => {
                map.get_mut(segment).ok_or_else(|| JexprError::patch_failed(format!("no such key '{segment}'"), ctx.path_string()))?
            }
            Value::Array(items) => {
                let index: usize =
                    segment.parse().map_err(|_| JexprError::patch_failed(format!("'{segment}' is not a valid array index"), ctx.path_string()))?;
                items.get_mut(index).ok_or_else(|| JexprError::patch_failed(format!("array index {index} out of range"), ctx.path_string()))?
            }
            _ => return Err(JexprError::patch_failed(format!("cannot descend into a scalar with segment '{segment}'"), ctx.path_string())),
        };
    }
    Ok(current)
}
