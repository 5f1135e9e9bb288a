#![allow(clippy::unwrap_used, clippy::expect_used, reason = "tests panic on failure")]

use super::*;
use crate::errors::EvalErrorKind;
use crate::union::{union, SharedUnion};
use pretty_assertions::assert_eq;

fn light() -> SharedUnion {
    union("Light", [("Red", 0), ("Amber", 1), ("Green", 2)])
}

fn full_cases() -> Cases {
    Cases::new()
        .on("Red", |args| Ok(Value::int(i64::try_from(args.len()).unwrap_or(-1))))
        .on("Amber", |args| Ok(args[0].clone()))
        .on("Green", |args| Ok(Value::list(args.to_vec())))
}

#[test]
fn test_dispatches_to_matching_handler() {
    let light = light();
    let amber = light.construct("Amber", vec![Value::string("slow")]).unwrap();
    assert_eq!(match_with(&amber, &full_cases()), Ok(Value::string("slow")));
}

#[test]
fn test_spreads_arguments_positionally() {
    let green = light()
        .construct("Green", vec![Value::int(1), Value::int(2)])
        .unwrap();
    assert_eq!(
        match_with(&green, &full_cases()),
        Ok(Value::list(vec![Value::int(1), Value::int(2)]))
    );
}

#[test]
fn test_nullary_handler_receives_no_arguments() {
    let red = light().construct("Red", vec![]).unwrap();
    assert_eq!(match_with(&red, &full_cases()), Ok(Value::int(0)));
}

#[test]
fn test_non_union_is_rejected() {
    let err = match_with(&Value::int(5), &full_cases()).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NotAUnion {
            type_name: "int".to_string()
        }
    );
}

#[test]
fn test_unrecognized_variant() {
    let red = light().construct("Red", vec![]).unwrap();
    let cases = full_cases().on("Blue", |_| Ok(Value::Void));
    let err = match_with(&red, &cases).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnrecognizedVariant {
            union: "Light".to_string(),
            variant: "Blue".to_string()
        }
    );
}

#[test]
fn test_incomplete_match_lists_missing_in_declaration_order() {
    let red = light().construct("Red", vec![]).unwrap();
    let cases = Cases::new().on("Amber", |_| Ok(Value::Void));
    let err = match_with(&red, &cases).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::IncompleteMatch {
            union: "Light".to_string(),
            missing: vec!["Red".to_string(), "Green".to_string()]
        }
    );
}

#[test]
fn test_unrecognized_wins_over_incomplete() {
    let red = light().construct("Red", vec![]).unwrap();
    let cases = Cases::new().on("Blue", |_| Ok(Value::Void));
    let err = match_with(&red, &cases).unwrap_err();
    assert!(matches!(
        err.kind,
        EvalErrorKind::UnrecognizedVariant { .. }
    ));
}

#[test]
fn test_handler_not_callable() {
    let amber = light().construct("Amber", vec![Value::int(1)]).unwrap();
    let cases = full_cases().case("Amber", Value::int(3));
    let err = match_with(&amber, &cases).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::HandlerNotCallable {
            variant: "Amber".to_string(),
            type_name: "int".to_string()
        }
    );
}

#[test]
fn test_non_callable_handler_for_other_tag_is_not_checked() {
    let red = light().construct("Red", vec![]).unwrap();
    let cases = full_cases().case("Amber", Value::int(3));
    assert_eq!(match_with(&red, &cases), Ok(Value::int(0)));
}

#[test]
fn test_handler_error_is_returned_unchanged() {
    let red = light().construct("Red", vec![]).unwrap();
    let cases = full_cases().on("Red", |_| Err(crate::EvalError::new("handler failed")));
    let err = match_with(&red, &cases).unwrap_err();
    assert_eq!(err.to_string(), "handler failed");
    assert!(!err.is_match_error());
}

#[test]
fn test_curried_handler() {
    let amber = light().construct("Amber", vec![Value::int(9)]).unwrap();
    let pair = crate::value::curry_to_arity(
        crate::value::FunctionValue::new("pair", |args| Ok(Value::list(args.to_vec()))),
        1,
    );
    let cases = full_cases().case("Amber", pair);
    assert_eq!(
        match_with(&amber, &cases),
        Ok(Value::list(vec![Value::int(9)]))
    );
}

#[test]
fn test_cases_replace_and_collect() {
    let cases: Cases = [
        ("Red", Value::int(1)),
        ("Amber", Value::int(2)),
        ("Red", Value::int(3)),
    ]
    .into_iter()
    .collect();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases.get("Red"), Some(&Value::int(3)));
    assert_eq!(cases.tags().collect::<Vec<_>>(), vec!["Red", "Amber"]);
    assert!(!cases.is_empty());
}
