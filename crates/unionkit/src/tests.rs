use super::*;

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}

#[test]
fn test_prelude_covers_the_common_path() {
    use crate::prelude::*;

    let toggle = union("Toggle", [("On", 0), ("Off", 0)]);
    let on = toggle.construct("On", vec![]);
    let cases = Cases::new()
        .on("On", |_| Ok(Value::Bool(true)))
        .on("Off", |_| Ok(Value::Bool(false)));
    assert_eq!(
        on.and_then(|on| match_with(&on, &cases)),
        Ok(Value::Bool(true))
    );
}
