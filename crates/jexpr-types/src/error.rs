//! Error taxonomy shared by the dispatcher, operator handlers, and every host
//! boundary (CLI included). Every variant carries the evaluation path so a
//! failure can be traced back to the expression that raised it.

use thiserror::Error;

/// The single error type returned by `jexpr_engine::execute` and `evaluate`.
///
/// All four variants share this enum (rather than four independent types) so
/// hosts can match on one type regardless of which subsystem raised the
/// failure.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JexprError {
    /// The first element of an operator-call sequence is a string that does
    /// not name a registered operator.
    #[error("unknown operator '{operator}' at {path}")]
    UnknownOperator { operator: String, path: String },

    /// Wrong arity, wrong type, out-of-range index/pointer, undefined
    /// variable, non-numeric arithmetic operand, negative epsilon, and
    /// similar malformed-argument failures.
    #[error("invalid argument: {message} at {path}")]
    InvalidArgument { message: String, path: String },

    /// `patch` could not apply the given RFC-6902 patch document.
    #[error("patch failed: {message} at {path}")]
    PatchFailed { message: String, path: String },

    /// The template-application collaborator rejected the template or
    /// context passed to it.
    #[error("template error: {message} at {path}")]
    TemplateError { message: String, path: String },
}

impl JexprError {
    pub fn unknown_operator(operator: impl Into<String>, path: impl Into<String>) -> Self {
        Self::UnknownOperator { operator: operator.into(), path: path.into() }
    }

    pub fn invalid_argument(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into(), path: path.into() }
    }

    pub fn patch_failed(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::PatchFailed { message: message.into(), path: path.into() }
    }

    pub fn template_error(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::TemplateError { message: message.into(), path: path.into() }
    }

    /// The path segment carried by this error, joined with `/` (see
    /// `EvalContext::path_string`). Useful for hosts that want to re-wrap
    /// the message without re-parsing the `Display` output.
    pub fn path(&self) -> &str {
        match self {
            Self::UnknownOperator { path, .. }
            | Self::InvalidArgument { path, .. }
            | Self::PatchFailed { path, .. }
            | Self::TemplateError { path, .. } => path,
        }
    }
}

pub type JexprResult<T> = Result<T, JexprError>;
