//! Numeric coercion and the integer-preservation convention.
//!
//! Resolved Open Question (see SPEC_FULL.md §9.1): arithmetic preserves
//! integer-ness when every operand is an integer and the operation is closed
//! over integers (`+ - * %`); division always yields float; any float
//! operand promotes the whole expression to float.

use jexpr_types::Value;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    pub fn as_f64(self) -> f64 {
        match self {
            Num::Int(i) => i as f64,
            Num::Float(f) => f,
        }
    }

    pub fn to_value(self) -> Value {
        match self {
            Num::Int(i) => Value::from(i),
            Num::Float(f) => serde_json::Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        }
    }
}

/// Extracts a `Num` from a JSON value, or `None` if it isn't a number.
pub fn as_num(value: &Value) -> Option<Num> {
    let n = value.as_number()?;
    if let Some(i) = n.as_i64() {
        Some(Num::Int(i))
    } else {
        n.as_f64().map(Num::Float)
    }
}

/// True if every element is numeric and integer-typed.
pub fn all_ints(nums: &[Num]) -> bool {
    nums.iter().all(|n| matches!(n, Num::Int(_)))
}

pub fn sum(nums: &[Num]) -> Num {
    if all_ints(nums) {
        let total: i64 = nums.iter().map(|n| if let Num::Int(i) = n { *i } else { unreachable!() }).sum();
        Num::Int(total)
    } else {
        Num::Float(nums.iter().map(|n| n.as_f64()).sum())
    }
}

pub fn product(nums: &[Num]) -> Num {
    if all_ints(nums) {
        let total: i64 = nums.iter().map(|n| if let Num::Int(i) = n { *i } else { unreachable!() }).product();
        Num::Int(total)
    } else {
        Num::Float(nums.iter().map(|n| n.as_f64()).product())
    }
}

pub fn subtract(a: Num, b: Num) -> Num {
    match (a, b) {
        (Num::Int(x), Num::Int(y)) => Num::Int(x - y),
        _ => Num::Float(a.as_f64() - b.as_f64()),
    }
}

pub fn negate(a: Num) -> Num {
    match a {
        Num::Int(x) => Num::Int(-x),
        Num::Float(x) => Num::Float(-x),
    }
}

/// Division always yields a float, per the language's division rule.
pub fn divide(a: Num, b: Num) -> Option<f64> {
    let b = b.as_f64();
    if b == 0.0 { None } else { Some(a.as_f64() / b) }
}
