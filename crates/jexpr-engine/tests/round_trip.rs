//! Round-trip laws and core invariants from spec §8, checked with randomized
//! inputs via `proptest`.

use jexpr_types::ExecuteOptions;
use proptest::prelude::*;
use serde_json::{json, Value};

fn small_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        ".{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::vec(("[a-z]{1,4}", inner), 0..4)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn purity_same_script_same_inputs_same_result(a in -1000i64..1000, b in -1000i64..1000) {
        let script = json!(["+", a, b]);
        let once = jexpr_engine::execute(script.clone(), vec![], ExecuteOptions::default()).unwrap();
        let twice = jexpr_engine::execute(script, vec![], ExecuteOptions::default()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn dollar_input_returns_the_supplied_value_unchanged(value in small_json()) {
        let inputs = vec![value.clone()];
        let result = jexpr_engine::execute(json!(["$input"]), inputs, ExecuteOptions::default()).unwrap();
        prop_assert_eq!(result, value);
    }

    #[test]
    fn patch_of_diff_reconstructs_the_target(a in small_json(), b in small_json()) {
        prop_assume!(a.is_object() && b.is_object());
        let script = json!(["patch", a.clone(), ["diff", a, b.clone()]]);
        let result = jexpr_engine::execute(script, vec![], ExecuteOptions::default()).unwrap();
        prop_assert_eq!(result, b);
    }

    #[test]
    fn cons_car_cdr_round_trips_non_empty_arrays(items in proptest::collection::vec(-100i64..100, 1..8)) {
        let array = Value::Array(items.iter().map(|n| json!(n)).collect());
        let script = json!(["cons", ["car", array.clone()], ["cdr", array.clone()]]);
        let result = jexpr_engine::execute(script, vec![], ExecuteOptions::default()).unwrap();
        prop_assert_eq!(result, array);
    }

    #[test]
    fn append_with_empty_array_is_identity(items in proptest::collection::vec(-100i64..100, 0..8)) {
        let array = Value::Array(items.iter().map(|n| json!(n)).collect());
        let left = json!(["append", {"array": []}, array.clone()]);
        let right = json!(["append", array.clone(), {"array": []}]);
        prop_assert_eq!(jexpr_engine::execute(left, vec![], ExecuteOptions::default()).unwrap(), array.clone());
        prop_assert_eq!(jexpr_engine::execute(right, vec![], ExecuteOptions::default()).unwrap(), array);
    }

    #[test]
    fn reverse_is_involutive(items in proptest::collection::vec(-100i64..100, 0..8)) {
        let array = Value::Array(items.iter().map(|n| json!(n)).collect());
        let script = json!(["reverse", ["reverse", array.clone()]]);
        let result = jexpr_engine::execute(script, vec![], ExecuteOptions::default()).unwrap();
        prop_assert_eq!(result, array);
    }

    #[test]
    fn map_with_identity_lambda_is_identity(items in proptest::collection::vec(-100i64..100, 0..8)) {
        let array = Value::Array(items.iter().map(|n| json!(n)).collect());
        let script = json!(["map", array.clone(), ["lambda", ["x"], ["$", "/x"]]]);
        let result = jexpr_engine::execute(script, vec![], ExecuteOptions::default()).unwrap();
        prop_assert_eq!(result, array);
    }

    #[test]
    fn higher_order_map_doubles_each_element(items in proptest::collection::vec(-1000i64..1000, 0..8)) {
        let array = Value::Array(items.iter().map(|n| json!(n)).collect());
        let script = json!(["map", array, ["lambda", ["x"], ["*", ["$", "/x"], 2]]]);
        let result = jexpr_engine::execute(script, vec![], ExecuteOptions::default()).unwrap();
        let doubled: Vec<Value> = items.iter().map(|n| json!(n * 2)).collect();
        prop_assert_eq!(result, Value::Array(doubled));
    }

    #[test]
    fn chained_comparison_matches_pairwise_check(a in -100i64..100, b in -100i64..100, c in -100i64..100) {
        let script = json!([">", a, b, c]);
        let result = jexpr_engine::execute(script, vec![], ExecuteOptions::default()).unwrap();
        let expected = a > b && b > c;
        prop_assert_eq!(result, json!(expected));
    }
}
