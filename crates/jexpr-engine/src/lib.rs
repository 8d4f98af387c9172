//! The jexpr evaluator: dispatcher, tail-call trampoline, operator registry,
//! and evaluation context (SPEC_FULL.md §2).
//!
//! Everything a host needs is reachable from [`execute`]; [`evaluate`] and
//! [`available_operators`] are exposed for advanced embedders per §4.8.

mod binding;
mod context;
mod dispatch;
mod operators;

pub use context::{DebugEvent, DebugHook, EvalContext, HookAction};
pub use dispatch::evaluate;
pub use operators::{Operator, OPERATOR_NAMES};

use jexpr_types::{ExecuteOptions, JexprResult, Value};
use jexpr_util::array_wrapper;

/// The top-level entry point: runs `script` against `inputs` under `options`,
/// returning a single JSON value or a [`jexpr_types::JexprError`].
///
/// Per §4.5, the wrapped-array form is only preserved on the return value
/// when the caller supplied it literally at the top of `script`; any other
/// result is returned bare.
#[tracing::instrument(skip_all, fields(input_count = inputs.len()))]
pub fn execute(script: Value, inputs: Vec<Value>, options: ExecuteOptions) -> JexprResult<Value> {
    execute_with_hook(script, inputs, options, None)
}

/// As [`execute`], but installs a debug hook fired before every operator
/// call (SPEC_FULL.md §4.10).
pub fn execute_with_hook(script: Value, inputs: Vec<Value>, options: ExecuteOptions, hook: Option<DebugHook>) -> JexprResult<Value> {
    let array_key = options.array_key.clone();
    let top_level_wrapper = array_wrapper::as_wrapped_array(&script, &array_key).is_some();

    let mut ctx = EvalContext::new(inputs, options);
    if let Some(hook) = hook {
        ctx = ctx.with_debug_hook(hook);
    }

    let result = evaluate(script, ctx).inspect_err(|err| tracing::warn!(%err, "evaluation failed"))?;
    if top_level_wrapper {
        return Ok(result);
    }
    Ok(array_wrapper::unwrap(result, &array_key))
}

/// A stable, sorted list of every operator name the dispatcher recognizes,
/// including both spellings of the logical-operator aliases.
pub fn available_operators() -> &'static [&'static str] {
    &OPERATOR_NAMES
}
