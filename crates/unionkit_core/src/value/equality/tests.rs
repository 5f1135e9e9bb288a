#![allow(clippy::unwrap_used, clippy::expect_used, reason = "tests panic on failure")]

use super::*;
use crate::union::union;

#[test]
fn test_scalars_compare_by_value() {
    assert!(deep_equal(&Value::int(1), &Value::int(1)));
    assert!(!deep_equal(&Value::int(1), &Value::int(2)));
    assert!(deep_equal(&Value::string("a"), &Value::string("a")));
    assert!(!deep_equal(&Value::string("a"), &Value::int(1)));
    assert!(deep_equal(&Value::Void, &Value::Void));
}

#[test]
fn test_numbers_compare_across_kinds() {
    assert!(deep_equal(&Value::int(2), &Value::float(2.0)));
    assert!(deep_equal(&Value::float(2.0), &Value::int(2)));
    assert!(!deep_equal(&Value::float(2.5), &Value::int(2)));
}

#[test]
fn test_int_float_comparison_is_exact() {
    // 2^53 + 1 is not representable as f64 and rounds to 2^53.
    let big = Value::int(9_007_199_254_740_993);
    assert!(!deep_equal(&big, &Value::float(9_007_199_254_740_992.0)));
    assert!(!deep_equal(&Value::float(9_007_199_254_740_992.0), &big));
    assert!(deep_equal(
        &Value::int(9_007_199_254_740_992),
        &Value::float(9_007_199_254_740_992.0)
    ));

    // i64::MAX rounds up to 2^63, which is out of range.
    assert!(!deep_equal(&Value::int(i64::MAX), &Value::float(9_223_372_036_854_775_808.0)));
    assert!(deep_equal(&Value::int(i64::MIN), &Value::float(-9_223_372_036_854_775_808.0)));
    assert!(!deep_equal(&Value::int(0), &Value::float(f64::NAN)));
    assert!(!deep_equal(&Value::int(1), &Value::float(f64::INFINITY)));
}

#[test]
fn test_nan_is_not_equal_to_itself() {
    let nan = Value::float(f64::NAN);
    assert!(!deep_equal(&nan, &nan));
}

#[test]
fn test_maps_ignore_key_order() {
    let a = Value::map([("x", Value::int(1)), ("y", Value::int(2))]);
    let b = Value::map([("y", Value::int(2)), ("x", Value::int(1))]);
    assert!(deep_equal(&a, &b));
    assert!(deep_equal(&b, &a));
}

#[test]
fn test_maps_require_same_keys() {
    let a = Value::map([("x", Value::Void)]);
    let b = Value::map([("y", Value::Void)]);
    assert!(!deep_equal(&a, &b));

    let c = Value::map([("x", Value::int(1)), ("y", Value::int(2))]);
    assert!(!deep_equal(&a, &c));
}

#[test]
fn test_lists_are_positional() {
    let a = Value::list(vec![Value::int(1), Value::int(2)]);
    let b = Value::list(vec![Value::int(2), Value::int(1)]);
    assert!(!deep_equal(&a, &b));
    assert!(deep_equal(&a, &a.clone()));
}

#[test]
fn test_list_equals_map_with_index_keys() {
    let list = Value::list(vec![Value::int(1), Value::int(2)]);
    let map = Value::map([("0", Value::int(1)), ("1", Value::int(2))]);
    assert!(deep_equal(&list, &map));
    assert!(deep_equal(&map, &list));

    let shuffled = Value::map([("0", Value::int(2)), ("1", Value::int(1))]);
    assert!(!deep_equal(&list, &shuffled));
}

#[test]
fn test_nested_composites_recurse() {
    let a = Value::map([(
        "items",
        Value::list(vec![Value::map([("id", Value::int(7))])]),
    )]);
    let b = Value::map([(
        "items",
        Value::list(vec![Value::map([("id", Value::int(7))])]),
    )]);
    let c = Value::map([(
        "items",
        Value::list(vec![Value::map([("id", Value::int(8))])]),
    )]);
    assert!(deep_equal(&a, &b));
    assert!(!deep_equal(&a, &c));
}

#[test]
fn test_composite_never_equals_scalar() {
    assert!(!deep_equal(&Value::list(vec![]), &Value::Void));
    assert!(!deep_equal(&Value::int(0), &Value::map(Vec::<(String, Value)>::new())));
}

#[test]
fn test_functions_compare_by_identity() {
    let f = Value::function("f", |_| Ok(Value::Void));
    let g = Value::function("f", |_| Ok(Value::Void));
    assert!(deep_equal(&f, &f.clone()));
    assert!(!deep_equal(&f, &g));
}

#[test]
fn test_union_instances_compare_tag_and_args() {
    let pair = union("Pair", [("Pair", 2), ("Empty", 0)]);
    let other = union("Couple", [("Pair", 2), ("Empty", 0)]);

    let a = pair
        .construct("Pair", vec![Value::int(1), Value::list(vec![Value::int(2)])])
        .unwrap();
    let b = pair
        .construct("Pair", vec![Value::int(1), Value::list(vec![Value::int(2)])])
        .unwrap();
    let empty = pair.construct("Empty", vec![]).unwrap();
    let foreign = other
        .construct("Pair", vec![Value::int(1), Value::list(vec![Value::int(2)])])
        .unwrap();

    assert!(deep_equal(&a, &b));
    assert!(!deep_equal(&a, &empty));
    assert!(deep_equal(&a, &foreign));
    assert!(deep_equal(&foreign, &a));
}

#[test]
fn test_unions_from_separate_declarations_match_by_tag() {
    let left = union("A", [("Tag", 1), ("Other", 1)]);
    let right = union("B", [("Tag", 1)]);

    let a = left.construct("Tag", vec![Value::int(1)]).unwrap();
    let b = right.construct("Tag", vec![Value::int(1)]).unwrap();
    let c = left.construct("Other", vec![Value::int(1)]).unwrap();

    assert!(a.as_union().unwrap().equals(&b));
    assert!(deep_equal(&Value::list(vec![a.clone()]), &Value::list(vec![b])));
    assert!(!deep_equal(&a, &c));
}

#[test]
fn test_union_never_equals_list_or_scalar() {
    let single = union("Single", [("One", 1)]);
    let one = single.construct("One", vec![Value::int(1)]).unwrap();
    assert!(!deep_equal(&one, &Value::list(vec![Value::int(1)])));
    assert!(!deep_equal(&one, &Value::int(1)));
}
