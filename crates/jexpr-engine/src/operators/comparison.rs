//! `< > <= >= == !=` and `approx` (§4.4). The four ordering operators chain:
//! `a op b op c` holds iff `a op b` and `b op c`.

use crate::context::EvalContext;
use crate::operators::{eval_args, Operator};
use jexpr_types::{JexprError, JexprResult, Value};
use jexpr_util::equality::{compare_values, values_equal};
use jexpr_util::numeric;
use std::cmp::Ordering;

pub fn eval(op: Operator, args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let values = eval_args(args, ctx)?;
    match op {
        Operator::Eq => {
            if values.len() < 2 {
                return Err(JexprError::invalid_argument("'==' requires at least 2 arguments", ctx.path_string()));
            }
            Ok(Value::Bool(values.windows(2).all(|pair| values_equal(&pair[0], &pair[1]))))
        }
        Operator::Ne => {
            let [a, b]: [Value; 2] =
                values.try_into().map_err(|_| JexprError::invalid_argument("'!=' requires exactly 2 arguments", ctx.path_string()))?;
            Ok(Value::Bool(!values_equal(&a, &b)))
        }
        Operator::Approx => {
            let [a, b, eps]: [Value; 3] =
                values.try_into().map_err(|_| JexprError::invalid_argument("'approx' requires exactly 3 arguments", ctx.path_string()))?;
            let (Some(a), Some(b), Some(eps)) = (numeric::as_num(&a), numeric::as_num(&b), numeric::as_num(&eps)) else {
                return Err(JexprError::invalid_argument("'approx' requires numeric operands", ctx.path_string()));
            };
            if eps.as_f64() < 0.0 {
                return Err(JexprError::invalid_argument("'approx' epsilon must be non-negative", ctx.path_string()));
            }
            Ok(Value::Bool((a.as_f64() - b.as_f64()).abs() <= eps.as_f64()))
        }
        Operator::Lt | Operator::Gt | Operator::Le | Operator::Ge => {
            if values.len() < 2 {
                return Err(JexprError::invalid_argument("chained comparison requires at least 2 arguments", ctx.path_string()));
            }
            let holds = |ord: Ordering| match op {
                Operator::Lt => ord == Ordering::Less,
                Operator::Gt => ord == Ordering::Greater,
                Operator::Le => ord != Ordering::Greater,
                Operator::Ge => ord != Ordering::Less,
                _ => unreachable!(),
            };
            for pair in values.windows(2) {
                let ord = compare_values(&pair[0], &pair[1]).ok_or_else(|| JexprError::invalid_argument("operands are not orderable", ctx.path_string()))?;
                if !holds(ord) {
                    return Ok(Value::Bool(false));
                }
            }
            Ok(Value::Bool(true))
        }
        _ => unreachable!("comparison::eval called with a non-comparison operator"),
    }
}
