//! `+ - * / %` (§4.4). N-ary except `%`, which is strictly binary.

use crate::context::EvalContext;
use crate::operators::{eval_args, Operator};
use jexpr_types::{JexprError, JexprResult, Value};
use jexpr_util::numeric::{self, Num};

pub fn eval(op: Operator, args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    let values = eval_args(args, ctx)?;
    let nums: Vec<Num> = values
        .iter()
        .enumerate()
        .map(|(i, v)| numeric::as_num(v).ok_or_else(|| JexprError::invalid_argument(format!("argument {i} is not a number"), ctx.path_string())))
        .collect::<JexprResult<_>>()?;

    match op {
        Operator::Add => {
            if nums.is_empty() {
                return Err(JexprError::invalid_argument("'+' requires at least one argument", ctx.path_string()));
            }
            Ok(numeric::sum(&nums).to_value())
        }
        Operator::Mul => {
            if nums.is_empty() {
                return Err(JexprError::invalid_argument("'*' requires at least one argument", ctx.path_string()));
            }
            Ok(numeric::product(&nums).to_value())
        }
        // Unary `-` negates; n-ary subtracts left-to-right.
        Operator::Sub => match nums.as_slice() {
            [] => Err(JexprError::invalid_argument("'-' requires at least one argument", ctx.path_string())),
            [only] => Ok(numeric::negate(*only).to_value()),
            [first, rest @ ..] => Ok(rest.iter().fold(*first, |acc, n| numeric::subtract(acc, *n)).to_value()),
        },
        // Unary `/` yields the reciprocal; n-ary divides left-to-right, always as float.
        Operator::Div => match nums.as_slice() {
            [] => Err(JexprError::invalid_argument("'/' requires at least one argument", ctx.path_string())),
            [only] => numeric::divide(Num::Int(1), *only)
                .map(Value::from)
                .ok_or_else(|| JexprError::invalid_argument("division by zero", ctx.path_string())),
            [first, rest @ ..] => {
                let mut acc = *first;
                for n in rest {
                    let divided = numeric::divide(acc, *n).ok_or_else(|| JexprError::invalid_argument("division by zero", ctx.path_string()))?;
                    acc = Num::Float(divided);
                }
                Ok(acc.to_value())
            }
        },
        Operator::Rem => match nums.as_slice() {
            [a, b] => {
                let (Num::Int(x), Num::Int(y)) = (a, b) else {
                    return Err(JexprError::invalid_argument("'%' requires integer operands", ctx.path_string()));
                };
                if *y == 0 {
                    return Err(JexprError::invalid_argument("remainder by zero", ctx.path_string()));
                }
                Ok(Value::from(x % y))
            }
            _ => Err(JexprError::invalid_argument("'%' requires exactly 2 arguments", ctx.path_string())),
        },
        _ => unreachable!("arithmetic::eval called with a non-arithmetic operator"),
    }
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
    fn sum_stays_integer_when_all_operands_are() {
        assert_eq!(eval(Operator::Add, vec![json!(1), json!(2), json!(3)], &ctx()).unwrap(), json!(6));
    }

    #[test]
    fn mixed_operand_promotes_to_float() {
        assert_eq!(eval(Operator::Add, vec![json!(1), json!(2.5)], &ctx()).unwrap(), json!(3.5));
    }

    #[test]
    fn unary_minus_negates() {
        assert_eq!(eval(Operator::Sub, vec![json!(5)], &ctx()).unwrap(), json!(-5));
    }

    #[test]
    fn division_is_always_float() {
        assert_eq!(eval(Operator::Div, vec![json!(4), json!(2)], &ctx()).unwrap(), json!(2.0));
    }

    #[test]
    fn division_by_zero_errors() {
        assert!(eval(Operator::Div, vec![json!(1), json!(0)], &ctx()).is_err());
    }

    #[test]
    fn remainder_follows_dividend_sign() {
        assert_eq!(eval(Operator::Rem, vec![json!(-7), json!(3)], &ctx()).unwrap(), json!(-1));
    }
}
