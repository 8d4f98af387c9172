//! The operator registry as data: an exhaustive tagged enumeration with a
//! single dispatch function, rather than a runtime string-keyed hash map
//! (design note §9). Exhaustiveness is checked by the compiler, dispatch
//! compiles to a jump table, and adding an operator touches every match
//! site that must handle it.

use once_cell::sync::Lazy;

/// Every name the dispatcher recognizes as "a registered operator" (rule 4
/// of §4.1), including the binding forms handled specially by the
/// trampoline (`if`, `let`, `call`, `lambda`, `$`, `$input`, `$inputs`) and
/// both accepted spellings of the logical operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    // Tail-position / binding forms, intercepted by the trampoline before
    // reaching generic operator dispatch.
    If,
    Let,
    Call,
    // Bindings, dispatched as ordinary (non-tail) handlers.
    Lambda,
    Dollar,
    DollarInput,
    DollarInputs,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    // Comparison
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    Approx,
    // Logical
    And,
    Or,
    Not,
    // Object
    Obj,
    Get,
    Merge,
    Keys,
    Values,
    // Array / list
    Car,
    Cdr,
    Cons,
    Append,
    Count,
    Map,
    Filter,
    Reduce,
    Find,
    Some_,
    Every,
    FlatMap,
    Partition,
    Zip,
    ZipWith,
    Reverse,
    Unique,
    Chunk,
    Flatten,
    // String / conversion
    StrConcat,
    // Template adapter
    PermutoApply,
    // JSON patch
    Diff,
    Patch,
}

impl Operator {
    pub fn from_name(name: &str) -> Option<Self> {
        use Operator::*;
        Some(match name {
            "if" => If,
            "let" => Let,
            "call" => Call,
            "lambda" => Lambda,
            "$" => Dollar,
            "$input" => DollarInput,
            "$inputs" => DollarInputs,
            "+" => Add,
            "-" => Sub,
            "*" => Mul,
            "/" => Div,
            "%" => Rem,
            "<" => Lt,
            ">" => Gt,
            "<=" => Le,
            ">=" => Ge,
            "==" => Eq,
            "!=" => Ne,
            "approx" => Approx,
            "&&" | "and" => And,
            "||" | "or" => Or,
            "not" => Not,
            "obj" => Obj,
            "get" => Get,
            "merge" => Merge,
            "keys" => Keys,
            "values" => Values,
            "car" => Car,
            "cdr" => Cdr,
            "cons" => Cons,
            "append" => Append,
            "count" => Count,
            "map" => Map,
            "filter" => Filter,
            "reduce" => Reduce,
            "find" => Find,
            "some" => Some_,
            "every" => Every,
            "flatMap" => FlatMap,
            "partition" => Partition,
            "zip" => Zip,
            "zipWith" => ZipWith,
            "reverse" => Reverse,
            "unique" => Unique,
            "chunk" => Chunk,
            "flatten" => Flatten,
            "strConcat" => StrConcat,
            "permuto.apply" => PermutoApply,
            "diff" => Diff,
            "patch" => Patch,
            _ => return None,
        })
    }

    /// The canonical (first-listed) spelling, used for debug-hook display
    /// and error messages. Aliases (`and`/`or`) report their `&&`/`||`
    /// canonical form.
    pub fn canonical_name(self) -> &'static str {
        use Operator::*;
        match self {
            If => "if",
            Let => "let",
            Call => "call",
            Lambda => "lambda",
            Dollar => "$",
            DollarInput => "$input",
            DollarInputs => "$inputs",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Rem => "%",
            Lt => "<",
            Gt => ">",
            Le => "<=",
            Ge => ">=",
            Eq => "==",
            Ne => "!=",
            Approx => "approx",
            And => "&&",
            Or => "||",
            Not => "not",
            Obj => "obj",
            Get => "get",
            Merge => "merge",
            Keys => "keys",
            Values => "values",
            Car => "car",
            Cdr => "cdr",
            Cons => "cons",
            Append => "append",
            Count => "count",
            Map => "map",
            Filter => "filter",
            Reduce => "reduce",
            Find => "find",
            Some_ => "some",
            Every => "every",
            FlatMap => "flatMap",
            Partition => "partition",
            Zip => "zip",
            ZipWith => "zipWith",
            Reverse => "reverse",
            Unique => "unique",
            Chunk => "chunk",
            Flatten => "flatten",
            StrConcat => "strConcat",
            PermutoApply => "permuto.apply",
            Diff => "diff",
            Patch => "patch",
        }
    }
}

/// All names the dispatcher will accept, sorted — including both aliases
/// of each logical operator. Computed once and reused by
/// `jexpr_engine::available_operators`.
pub static OPERATOR_NAMES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut names = vec![
        "if", "let", "call", "lambda", "$", "$input", "$inputs", "+", "-", "*", "/", "%", "<", ">", "<=", ">=", "==", "!=", "approx",
        "&&", "and", "||", "or", "not", "obj", "get", "merge", "keys", "values", "car", "cdr", "cons", "append", "count", "map",
        "filter", "reduce", "find", "some", "every", "flatMap", "partition", "zip", "zipWith", "reverse", "unique", "chunk", "flatten",
        "strConcat", "permuto.apply", "diff", "patch",
    ];
    names.sort_unstable();
    names
});
