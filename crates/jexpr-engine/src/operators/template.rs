//! Adapter to the external template-application collaborator behind
//! `permuto.apply` (§1: "treated as a black-box function
//! `apply(template, context, options) -> json`").
//!
//! The evaluator only owns the seam; a host embedding the engine may supply
//! a richer `TemplateEngine` (a real templating crate) in place of the
//! minimal default below.

use crate::context::EvalContext;
use crate::operators::eval_args;
use jexpr_types::{JexprError, JexprResult, Value};
use jexpr_util::pointer;

pub trait TemplateEngine {
    fn apply(&self, template: &Value, context: &Value, enable_interpolation: bool, path: &str) -> JexprResult<Value>;
}

/// Walks the template, replacing any string of the exact form `${pointer}`
/// with the pointee resolved from `context` via RFC 6901; every other value
/// is returned unchanged. A no-op when interpolation is disabled. An
/// interpolated pointer that cannot be resolved against `context` rejects
/// the whole template with `TemplateError`, per §7 ("template adapter
/// rejects the template or context").
pub struct DefaultTemplateEngine;

impl TemplateEngine for DefaultTemplateEngine {
    fn apply(&self, template: &Value, context: &Value, enable_interpolation: bool, path: &str) -> JexprResult<Value> {
        if !enable_interpolation {
            return Ok(template.clone());
        }
        interpolate(template, context).map_err(|message| JexprError::template_error(message, path.to_string()))
    }
}

fn interpolate(template: &Value, context: &Value) -> Result<Value, String> {
    match template {
        Value::String(s) => interpolate_string(s, context),
        Value::Array(items) => items.iter().map(|v| interpolate(v, context)).collect::<Result<Vec<_>, _>>().map(Value::Array),
        Value::Object(map) => {
            map.iter().map(|(k, v)| interpolate(v, context).map(|v| (k.clone(), v))).collect::<Result<_, _>>().map(Value::Object)
        }
        other => Ok(other.clone()),
    }
}

fn interpolate_string(s: &str, context: &Value) -> Result<Value, String> {
    match s.strip_prefix("${").and_then(|rest| rest.strip_suffix('}')) {
        Some(pointer_str) => pointer::navigate_pointer(context, pointer_str)
            .cloned()
            .map_err(|message| format!("unresolvable template pointer '{pointer_str}': {message}")),
        None => Ok(Value::String(s.to_string())),
    }
}

pub fn apply(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let values = eval_args(args, ctx)?;
    let [template, context]: [Value; 2] =
        values.try_into().map_err(|_| JexprError::invalid_argument("'permuto.apply' requires exactly 2 arguments", ctx.path_string()))?;
    DefaultTemplateEngine.apply(&template, &context, ctx.options().template_options.enable_interpolation, &ctx.path_string())
}
