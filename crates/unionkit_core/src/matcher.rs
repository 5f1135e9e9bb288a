//! Exhaustive pattern matching over union instances.
//!
//! `match_with` takes a union instance and one handler per declared
//! variant. There is no wildcard arm: the handler set must equal the tag
//! set exactly, and any mismatch fails before a handler runs.

use tracing::{debug, trace};

use crate::errors::{
    handler_not_callable, incomplete_match, not_a_union, unrecognized_variant, EvalResult,
};
use crate::value::Value;

/// Handler map from variant tag to a callable value.
///
/// Inserting a tag twice replaces the earlier handler.
#[derive(Clone, Debug, Default)]
pub struct Cases {
    arms: Vec<(String, Value)>,
}

impl Cases {
    pub fn new() -> Self {
        Cases::default()
    }

    /// Add (or replace) the handler for `tag`.
    #[must_use]
    pub fn case(mut self, tag: impl Into<String>, handler: Value) -> Self {
        self.insert(tag, handler);
        self
    }

    /// Add a native closure as the handler for `tag`.
    #[must_use]
    pub fn on<F>(self, tag: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    {
        let tag = tag.into();
        let handler = Value::function(tag.clone(), handler);
        self.case(tag, handler)
    }

    pub fn insert(&mut self, tag: impl Into<String>, handler: Value) {
        let tag = tag.into();
        if let Some(arm) = self.arms.iter_mut().find(|(t, _)| *t == tag) {
            arm.1 = handler;
        } else {
            self.arms.push((tag, handler));
        }
    }

    pub fn get(&self, tag: &str) -> Option<&Value> {
        self.arms.iter().find(|(t, _)| t == tag).map(|(_, h)| h)
    }

    /// Tags with a handler, in insertion order.
    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.arms.iter().map(|(t, _)| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Cases {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        let mut cases = Cases::new();
        for (tag, handler) in iter {
            cases.insert(tag, handler);
        }
        cases
    }
}

/// Dispatch `subject` to the handler for its tag.
///
/// Validation runs in a fixed order and the first failure wins:
/// 1. `subject` must be a union instance (`NotAUnion`)
/// 2. every case must name a declared variant (`UnrecognizedVariant`)
/// 3. every declared variant must have a case (`IncompleteMatch`)
/// 4. the selected handler must be callable (`HandlerNotCallable`)
///
/// The handler receives the instance's arguments positionally and its
/// result is returned unchanged.
pub fn match_with(subject: &Value, cases: &Cases) -> EvalResult {
    let Value::Union(instance) = subject else {
        debug!(got = subject.type_name(), "match on non-union value");
        return Err(not_a_union(subject.type_name()));
    };
    let union = instance.union_type();

    if let Some(extra) = cases.tags().find(|tag| !union.contains(tag)) {
        debug!(union = union.name(), variant = extra, "match names undeclared variant");
        return Err(unrecognized_variant(union.name(), extra));
    }

    let missing: Vec<String> = union
        .tags()
        .filter(|tag| cases.get(tag).is_none())
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        debug!(union = union.name(), ?missing, "non-exhaustive match");
        return Err(incomplete_match(union.name(), missing));
    }

    let tag = instance.tag();
    let handler = match cases.get(tag) {
        Some(handler) if handler.is_callable() => handler,
        Some(handler) => return Err(handler_not_callable(tag, handler.type_name())),
        None => unreachable!("exhaustiveness verified above"),
    };

    trace!(union = union.name(), tag, arity = instance.args().len(), "dispatching match");
    handler.call(instance.args().to_vec())
}

#[cfg(test)]
mod tests;
