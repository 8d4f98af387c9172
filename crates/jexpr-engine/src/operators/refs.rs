//! The binding/variable-access forms that are not themselves tail positions:
//! `lambda`, `$`, `$input`, `$inputs` (§4.2, §4.3).

use crate::context::EvalContext;
use crate::dispatch::evaluate;
use jexpr_types::lambda::LAMBDA_TAG;
use jexpr_types::{JexprError, JexprResult, Value};
use jexpr_util::{array_wrapper, pointer};

/// `lambda` never evaluates its body: it reconstructs the three-element
/// tagged sequence verbatim, after checking that the parameter list is an
/// array of strings.
pub fn lambda(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [params, body]: [Value; 2] =
        args.try_into().map_err(|_| JexprError::invalid_argument("'lambda' requires exactly 2 arguments: params and body", ctx.path_string()))?;
    let param_list = params.as_array().ok_or_else(|| JexprError::invalid_argument("lambda parameters must be an array", ctx.path_string()))?;
    if !param_list.iter().all(Value::is_string) {
        return Err(JexprError::invalid_argument("lambda parameters must all be strings", ctx.path_string()));
    }
    Ok(Value::Array(vec![Value::String(LAMBDA_TAG.to_string()), params, body]))
}

/// `$` resolves a flat-variable-mapping path: the first pointer segment
/// names the variable, later segments descend into its value via RFC 6901.
pub fn dollar(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [pointer_expr]: [Value; 1] = args.try_into().map_err(|_| JexprError::invalid_argument("'$' requires exactly 1 argument", ctx.path_string()))?;
    let pointer_value = evaluate(pointer_expr, ctx.with_path("$"))?;
    let raw = pointer_value.as_str().ok_or_else(|| JexprError::invalid_argument("'$' argument must be a string", ctx.path_string()))?;
    let rest = raw.strip_prefix('/').ok_or_else(|| JexprError::invalid_argument("'$' path must begin with '/'", ctx.path_string()))?;
    let mut segments = pointer::split_segments(rest);
    if segments.is_empty() {
        return Err(JexprError::invalid_argument("'$' path must name a variable", ctx.path_string()));
    }
    let var_name = segments.remove(0);
    let root = ctx
        .vars()
        .get(&var_name)
        .ok_or_else(|| JexprError::invalid_argument(format!("undefined variable '{var_name}'"), ctx.path_string()))?;
    pointer::navigate(root, &segments).cloned().map_err(|message| JexprError::invalid_argument(message, ctx.path_string()))
}

pub fn dollar_input(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    match args.len() {
        0 => Ok(ctx.inputs().first().cloned().unwrap_or(Value::Null)),
        1 => {
            let index_expr = args.into_iter().next().unwrap();
            let index_value = evaluate(index_expr, ctx.with_path("$input"))?;
            let index = index_value
                .as_u64()
                .ok_or_else(|| JexprError::invalid_argument("'$input' index must be a non-negative integer", ctx.path_string()))?;
            ctx.inputs()
                .get(index as usize)
                .cloned()
                .ok_or_else(|| JexprError::invalid_argument(format!("input index {index} out of range"), ctx.path_string()))
        }
        n => Err(JexprError::invalid_argument(format!("'$input' takes at most 1 argument, got {n}"), ctx.path_string())),
    }
}

pub fn dollar_inputs(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    if !args.is_empty() {
        return Err(JexprError::invalid_argument("'$inputs' takes no arguments", ctx.path_string()));
    }
    Ok(array_wrapper::wrap(ctx.inputs().to_vec(), ctx.array_key()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jexpr_types::ExecuteOptions;
    use serde_json::json;

    fn ctx_with_var() -> EvalContext {
        EvalContext::new(vec![json!(10), json!(20)], ExecuteOptions::default())
            .with_bindings([("x".to_string(), json!({"y": 5}))])
    }

    #[test]
    fn dollar_resolves_variable_then_descends() {
        assert_eq!(dollar(vec![json!("/x/y")], &ctx_with_var()).unwrap(), json!(5));
    }

    #[test]
    fn dollar_requires_leading_slash() {
        assert!(dollar(vec![json!("x")], &ctx_with_var()).is_err());
    }

    #[test]
    fn dollar_input_defaults_to_first() {
        assert_eq!(dollar_input(vec![], &ctx_with_var()).unwrap(), json!(10));
    }

    #[test]
    fn dollar_input_with_index() {
        assert_eq!(dollar_input(vec![json!(1)], &ctx_with_var()).unwrap(), json!(20));
    }

    #[test]
    fn dollar_input_out_of_range_errors() {
        assert!(dollar_input(vec![json!(5)], &ctx_with_var()).is_err());
    }

    #[test]
    fn dollar_inputs_wraps_the_full_sequence() {
        assert_eq!(dollar_inputs(vec![], &ctx_with_var()).unwrap(), json!({"array": [10, 20]}));
    }

    #[test]
    fn lambda_reconstructs_the_tagged_form_without_evaluating_body() {
        let value = lambda(vec![json!(["x"]), json!(["nonexistent-operator"])], &ctx_with_var()).unwrap();
        assert_eq!(value, json!(["lambda", ["x"], ["nonexistent-operator"]]));
    }
}
