//! The shared evaluation context: inputs, variable bindings, the
//! diagnostic path, per-invocation configuration, and the optional debugger
//! hook (SPEC_FULL.md §4.10).

use im::HashMap as ImHashMap;
use jexpr_types::{ExecuteOptions, Value};
use std::rc::Rc;

/// A snapshot handed to an installed debug hook immediately before an
/// operator handler runs.
pub struct DebugEvent<'a> {
    pub operator: Option<&'a str>,
    pub expr: &'a Value,
    pub path: &'a [String],
    pub depth: usize,
    pub vars: &'a ImHashMap<String, Value>,
}

/// What a debug hook asks the trampoline to do next. There is no `Pause`
/// variant: without a REPL in scope to pause for, a host that wants to halt
/// evaluation early returns `Abort`.
#[derive(Debug, Clone, PartialEq)]
pub enum HookAction {
    Continue,
    Abort(String),
}

pub type DebugHook = Rc<dyn Fn(&DebugEvent) -> HookAction>;

/// An immutable-by-convention evaluation context. Cheap to clone: the
/// variable bindings use a structurally-shared persistent map (`im::HashMap`),
/// so extending scope in `let` or a lambda invocation costs only the new
/// bindings, not a copy of the whole map.
#[derive(Clone)]
pub struct EvalContext {
    inputs: Rc<Vec<Value>>,
    vars: ImHashMap<String, Value>,
    path: Vec<String>,
    options: Rc<ExecuteOptions>,
    depth: usize,
    debug_hook: Option<DebugHook>,
}

impl EvalContext {
    pub fn new(inputs: Vec<Value>, options: ExecuteOptions) -> Self {
        Self {
            inputs: Rc::new(inputs),
            vars: ImHashMap::new(),
            path: Vec::new(),
            options: Rc::new(options),
            depth: 0,
            debug_hook: None,
        }
    }

    pub fn with_debug_hook(mut self, hook: DebugHook) -> Self {
        self.debug_hook = Some(hook);
        self
    }

    pub fn inputs(&self) -> &[Value] {
        &self.inputs
    }

    pub fn vars(&self) -> &ImHashMap<String, Value> {
        &self.vars
    }

    pub fn options(&self) -> &ExecuteOptions {
        &self.options
    }

    pub fn array_key(&self) -> &str {
        &self.options.array_key
    }

    /// Returns a new context with `bindings` added on top of the current
    /// scope (strict lexical shadowing: a binding with an existing name
    /// hides the outer one for the extent of the new scope only).
    pub fn with_bindings(&self, bindings: impl IntoIterator<Item = (String, Value)>) -> Self {
        let mut vars = self.vars.clone();
        for (name, value) in bindings {
            vars.insert(name, value);
        }
        Self { vars, ..self.clone() }
    }

    /// Descends one level for diagnostics. The path is append-only along a
    /// descent; it is simply discarded (not popped) when the child context
    /// goes out of scope on ascent.
    pub fn with_path(&self, segment: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        Self { path, depth: self.depth + 1, ..self.clone() }
    }

    /// Descends one level, first truncating the path back to `base_depth`.
    /// Used by the trampoline's tail-position rewrites (`let`, `call`) so
    /// that a deeply tail-recursive loop reuses one diagnostic frame per
    /// iteration instead of growing the path vector without bound: the path
    /// is appended on descent into a non-tail subexpression and popped back
    /// to `base_depth` on every tail rewrite, matching §5's "appended on
    /// descent and popped ... on ascent" for the one position where a loop
    /// stands in for recursion.
    pub fn with_tail_path(&self, base_depth: usize, segment: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.truncate(base_depth);
        path.push(segment.into());
        Self { path, depth: base_depth + 1, ..self.clone() }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            "/".to_string()
        } else {
            self.path.iter().map(|s| format!("/{s}")).collect()
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Invokes the debug hook, if one is installed, returning `Continue`
    /// when absent. Costs a single `Option::is_some` check otherwise.
    pub fn fire_debug_hook(&self, operator: Option<&str>, expr: &Value) -> HookAction {
        match &self.debug_hook {
            Some(hook) => hook(&DebugEvent { operator, expr, path: &self.path, depth: self.depth, vars: &self.vars }),
            None => HookAction::Continue,
        }
    }
}
