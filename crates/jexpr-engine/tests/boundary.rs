//! Boundary behaviors from spec §8 that are easiest to pin down as literal
//! cases rather than properties.

use jexpr_types::{ExecuteOptions, JexprError};
use serde_json::json;

fn err(script: serde_json::Value) -> JexprError {
    jexpr_engine::execute(script, vec![], ExecuteOptions::default()).unwrap_err()
}

#[test]
fn car_of_empty_sequence_is_invalid_argument() {
    assert!(matches!(err(json!(["car", {"array": []}])), JexprError::InvalidArgument { .. }));
}

#[test]
fn cdr_of_empty_sequence_is_invalid_argument() {
    assert!(matches!(err(json!(["cdr", {"array": []}])), JexprError::InvalidArgument { .. }));
}

#[test]
fn division_by_any_zero_operand_is_invalid_argument() {
    assert!(matches!(err(json!(["/", 5, 0])), JexprError::InvalidArgument { .. }));
    assert!(matches!(err(json!(["/", 0])), JexprError::InvalidArgument { .. }));
}

#[test]
fn negative_epsilon_is_invalid_argument() {
    assert!(matches!(err(json!(["approx", 1, 1, -1])), JexprError::InvalidArgument { .. }));
}

#[test]
fn dispatch_handles_every_expression_shape() {
    // One representative of each of the seven classification rules; every
    // one must either evaluate or raise a single taxonomy error, never panic.
    let scripts = vec![
        json!(42),                          // rule 1: scalar
        json!({"array": [1, 2]}),            // rule 2: wrapped literal array
        json!({"a": 1, "b": 2}),             // rule 3: plain mapping
        json!(["+", 1, 2]),                  // rule 4: operator call
        json!(["not-an-operator", 1]),       // rule 5: unknown operator
        json!([1, 2, 3]),                    // rule 6: literal sequence
        json!([]),                           // rule 7: empty sequence
    ];
    for script in scripts {
        let _ = jexpr_engine::execute(script, vec![], ExecuteOptions::default());
    }
}
