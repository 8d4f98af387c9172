//! `&& || not` (aliases `and`/`or`), short-circuiting (§4.4).

use crate::context::EvalContext;
use crate::dispatch::evaluate;
use crate::operators::Operator;
use jexpr_types::{JexprError, JexprResult, Value};
use jexpr_util::truthiness::is_truthy;

/// `&&`/`||` only evaluate as many operands as needed to settle the result,
/// so unlike most operators they cannot go through `eval_args` — the
/// trampoline passed them their arguments unevaluated for exactly this
/// reason.
pub fn eval_short_circuit(op: Operator, args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    if args.is_empty() {
        return Err(JexprError::invalid_argument(format!("'{}' requires at least one argument", op.canonical_name()), ctx.path_string()));
    }
    let mut last = Value::Bool(op == Operator::And);
    for (i, arg) in args.into_iter().enumerate() {
        let value = evaluate(arg, ctx.with_path(i.to_string()))?;
        let truthy = is_truthy(&value);
        last = value;
        match op {
            Operator::And if !truthy => return Ok(last),
            Operator::Or if truthy => return Ok(last),
            _ => {}
        }
    }
    Ok(last)
}

pub fn eval_not(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let [arg]: [Value; 1] = args.try_into().map_err(|_| JexprError::invalid_argument("'not' requires exactly 1 argument", ctx.path_string()))?;
    let value = evaluate(arg, ctx.with_path("not"))?;
    Ok(Value::Bool(!is_truthy(&value)))
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
    fn and_short_circuits_on_first_falsy() {
        // A malformed second operand would error if evaluated; it must not be reached.
        let script = vec![json!(false), json!(["nonexistent-operator"])];
        assert_eq!(eval_short_circuit(Operator::And, script, &ctx()).unwrap(), json!(false));
    }

    #[test]
    fn or_short_circuits_on_first_truthy() {
        let script = vec![json!(1), json!(["nonexistent-operator"])];
        assert_eq!(eval_short_circuit(Operator::Or, script, &ctx()).unwrap(), json!(1));
    }

    #[test]
    fn and_returns_last_value_when_all_truthy() {
        assert_eq!(eval_short_circuit(Operator::And, vec![json!(1), json!(2)], &ctx()).unwrap(), json!(2));
    }

    #[test]
    fn not_negates_truthiness() {
        assert_eq!(eval_not(vec![json!(0)], &ctx()).unwrap(), json!(true));
        assert_eq!(eval_not(vec![json!("x")], &ctx()).unwrap(), json!(false));
    }
}
