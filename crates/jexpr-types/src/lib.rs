//! Shared types for the `jexpr` sandboxed JSON expression evaluator:
//! the error taxonomy, per-invocation configuration, and the lambda value
//! recognition helpers used by both the engine and the CLI front-end.

pub mod error;
pub mod lambda;
pub mod options;

pub use error::{JexprError, JexprResult};
pub use options::{ExecuteOptions, TemplateOptions};

/// The JSON value type the evaluator operates over. An alias rather than a
/// bespoke enum: `serde_json::Value` compiled with the `preserve_order`
/// feature already gives every invariant the data model needs (insertion
/// order preserved on objects, structural equality, `i64`/`f64`-aware
/// numbers).
pub type Value = serde_json::Value;
