//! The eight literal seed scenarios (spec §8).

use jexpr_types::{ExecuteOptions, JexprError};
use serde_json::json;

fn run(script: serde_json::Value) -> serde_json::Value {
    jexpr_engine::execute(script, vec![json!(null)], ExecuteOptions::default()).unwrap()
}

#[test]
fn arithmetic() {
    assert_eq!(run(json!(["+", 1, 2, 3])), json!(6));
}

#[test]
fn chained_compare() {
    assert_eq!(run(json!([">", 5, 3, 1])), json!(true));
    assert_eq!(run(json!([">", 5, 5])), json!(false));
}

#[test]
fn binding() {
    assert_eq!(run(json!(["let", [["x", 42]], ["$", "/x"]])), json!(42));
}

#[test]
fn higher_order_map() {
    let script = json!(["map", {"array": [1, 2, 3]}, ["lambda", ["x"], ["*", ["$", "/x"], 2]]]);
    assert_eq!(run(script), json!([2, 4, 6]));
}

#[test]
fn stored_lambda() {
    let script = json!([
        "let",
        [["f", ["lambda", ["x"], ["+", ["$", "/x"], 1]]]],
        ["map", {"array": [1, 2, 3]}, ["$", "/f"]]
    ]);
    assert_eq!(run(script), json!([2, 3, 4]));
}

#[test]
fn tail_recursive_newtons_method_for_sqrt_two() {
    // step(n, x) = if n <= 0 then x else step(n-1, (x + 2/x) / 2)
    let script = json!([
        "let",
        [["step", ["lambda", ["n", "x"],
            ["if", ["<=", ["$", "/n"], 0],
                ["$", "/x"],
                ["call", ["$", "/step"], ["-", ["$", "/n"], 1],
                    ["/", ["+", ["$", "/x"], ["/", 2, ["$", "/x"]]], 2]
                ]
            ]
        ]]],
        ["call", ["$", "/step"], 100, 1]
    ]);
    let result = run(script);
    let value = result.as_f64().unwrap();
    assert!((value - std::f64::consts::SQRT_2).abs() < 1e-12, "expected ~sqrt(2), got {value}");
}

#[test]
fn custom_array_key() {
    let script = json!(["map", {"@x": [1, 2]}, ["lambda", ["x"], ["$", "/x"]]]);
    let options = ExecuteOptions { array_key: "@x".to_string(), ..ExecuteOptions::default() };
    let result = jexpr_engine::execute(script, vec![], options).unwrap();
    assert_eq!(result, json!([1, 2]));
}

#[test]
fn patch_round_trip() {
    let a = json!({"name": "Ada", "role": "engineer"});
    let b = json!({"name": "Ada", "role": "scientist", "team": "core"});
    let script = json!(["patch", a.clone(), ["diff", a, b.clone()]]);
    let result = jexpr_engine::execute(script, vec![], ExecuteOptions::default()).unwrap();
    assert_eq!(result, b);
}

#[test]
fn unknown_variable_path_is_invalid_argument() {
    let err = jexpr_engine::execute(json!(["$", "/nope"]), vec![], ExecuteOptions::default()).unwrap_err();
    assert!(matches!(err, JexprError::InvalidArgument { .. }));
}

#[test]
fn undefined_operator_is_unknown_operator() {
    let err = jexpr_engine::execute(json!(["frobnicate", 1]), vec![], ExecuteOptions::default()).unwrap_err();
    assert!(matches!(err, JexprError::UnknownOperator { .. }));
}

#[test]
fn array_wrapper_key_mismatch_is_not_recognized_as_a_literal_array() {
    // The script was written assuming the default key "array", but the
    // caller configured "@x"; the wrapper is not recognized under rule 2, so
    // `map` receives a plain one-key object instead of an array operand.
    let options = ExecuteOptions { array_key: "@x".to_string(), ..ExecuteOptions::default() };
    let script = json!(["map", {"array": [1, 2, 3]}, ["lambda", ["x"], ["$", "/x"]]]);
    let err = jexpr_engine::execute(script, vec![], options).unwrap_err();
    assert!(matches!(err, JexprError::InvalidArgument { .. }));
}
