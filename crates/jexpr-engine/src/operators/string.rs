//! `strConcat` (§4.4).

use crate::context::EvalContext;
use crate::operators::eval_args;
use jexpr_types::{JexprResult, Value};
use jexpr_util::render::render_for_concat;

pub fn concat(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let values = eval_args(args, ctx)?;
    Ok(Value::String(values.iter().map(render_for_concat).collect()))
}
