//! The operator handler groups and the single dispatch function that routes
//! a classified operator call to its handler (design note §9).

mod operator;

pub mod arithmetic;
pub mod array;
pub mod comparison;
pub mod logical;
pub mod object;
pub mod patch;
pub mod refs;
pub mod string;
pub mod template;

pub use operator::{Operator, OPERATOR_NAMES};

use crate::context::EvalContext;
use crate::dispatch::evaluate;
use jexpr_types::{JexprResult, Value};

/// Evaluates every argument in order under `ctx`, for the (majority of)
/// operators that evaluate all their arguments eagerly. Short-circuiting and
/// raw-structure forms (`&&`, `||`, `not`, `lambda`, `obj`) evaluate their
/// own arguments instead of going through this helper.
pub(crate) fn eval_args(args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Vec<Value>> {
    args.into_iter().enumerate().map(|(i, arg)| evaluate(arg, ctx.with_path(i.to_string()))).collect()
}

/// Routes a classified operator call to its handler. `if`, `let`, and `call`
/// never reach here: the trampoline in `dispatch.rs` intercepts them before
/// generic dispatch because they are the tail positions (§4.6).
pub fn dispatch(op: Operator, args: Vec<Value>, ctx: &EvalContext) -> JexprResult<Value> {
    use Operator::*;
    match op {
        If | Let | Call => unreachable!("tail-position operators are handled by the trampoline"),

        Lambda => refs::lambda(args, ctx),
        Dollar => refs::dollar(args, ctx),
        DollarInput => refs::dollar_input(args, ctx),
        DollarInputs => refs::dollar_inputs(args, ctx),

        Add | Sub | Mul | Div | Rem => arithmetic::eval(op, args, ctx),

        Lt | Gt | Le | Ge | Eq | Ne | Approx => comparison::eval(op, args, ctx),

        And | Or => logical::eval_short_circuit(op, args, ctx),
        Not => logical::eval_not(args, ctx),

        Obj => object::obj(args, ctx),
        Get => object::get(args, ctx),
        Merge => object::merge(args, ctx),
        Keys => object::keys(args, ctx),
        Values => object::values(args, ctx),

        Car => array::car(args, ctx),
        Cdr => array::cdr(args, ctx),
        Cons => array::cons(args, ctx),
        Append => array::append(args, ctx),
        Count => array::count(args, ctx),
        Map => array::map(args, ctx),
        Filter => array::filter(args, ctx),
        Reduce => array::reduce(args, ctx),
        Find => array::find(args, ctx),
        Some_ => array::some(args, ctx),
        Every => array::every(args, ctx),
        FlatMap => array::flat_map(args, ctx),
        Partition => array::partition(args, ctx),
        Zip => array::zip(args, ctx),
        ZipWith => array::zip_with(args, ctx),
        Reverse => array::reverse(args, ctx),
        Unique => array::unique(args, ctx),
        Chunk => array::chunk(args, ctx),
        Flatten => array::flatten(args, ctx),

        StrConcat => string::concat(args, ctx),

        PermutoApply => template::apply(args, ctx),

        Diff => patch::diff(args, ctx),
        Patch => patch::patch(args, ctx),
    }
}
