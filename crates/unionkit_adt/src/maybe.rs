//! Presence or absence of a value: `Just(value)` or `Nothing`.

use std::fmt;
use std::sync::OnceLock;

use unionkit_core::{
    match_with, type_mismatch, union, wrong_function_args, Cases, EvalError, EvalResult,
    SharedUnion, UnionValue, Value,
};

use crate::monad::{describe, Monad};

const JUST: &str = "Just";
const NOTHING: &str = "Nothing";

static MAYBE: OnceLock<SharedUnion> = OnceLock::new();

/// The process-wide `Maybe` declaration.
pub fn maybe_union() -> &'static SharedUnion {
    MAYBE.get_or_init(|| union("Maybe", [(JUST, 1), (NOTHING, 0)]))
}

/// A `Maybe` union instance.
#[derive(Clone)]
pub struct Maybe(UnionValue);

impl Maybe {
    pub fn just(value: Value) -> Self {
        Self::build(JUST, vec![value])
    }

    pub fn nothing() -> Self {
        Self::build(NOTHING, Vec::new())
    }

    fn build(tag: &str, args: Vec<Value>) -> Self {
        match maybe_union().construct(tag, args).and_then(Maybe::try_from) {
            Ok(maybe) => maybe,
            Err(err) => unreachable!("Maybe declares {tag} with matching arity: {err}"),
        }
    }

    pub fn is_just(&self) -> bool {
        self.0.tag() == JUST
    }

    pub fn is_nothing(&self) -> bool {
        self.0.tag() == NOTHING
    }

    /// Native view for compiler-checked matching.
    pub fn as_option(&self) -> Option<&Value> {
        match self.0.args() {
            [value] if self.is_just() => Some(value),
            _ => None,
        }
    }

    pub fn as_union(&self) -> &UnionValue {
        &self.0
    }

    fn subject(&self) -> Value {
        Value::Union(self.0.clone())
    }
}

impl Monad for Maybe {
    fn of(value: Value) -> Self {
        Maybe::just(value)
    }

    fn map(&self, func: &Value) -> EvalResult<Self> {
        let func = func.clone();
        let this = self.subject();
        let cases = Cases::new()
            .on(JUST, move |args| {
                Ok(Maybe::just(func.call(args.to_vec())?).into())
            })
            .on(NOTHING, move |_| Ok(this.clone()));
        Maybe::try_from(match_with(&self.subject(), &cases)?)
    }

    fn chain(&self, func: &Value) -> EvalResult<Self> {
        let this = self.subject();
        let cases = Cases::new()
            .case(JUST, func.clone())
            .on(NOTHING, move |_| Ok(this.clone()));
        Maybe::try_from(match_with(&self.subject(), &cases)?)
    }

    fn ap(&self, other: &Self) -> EvalResult<Self> {
        let other = other.clone();
        let this = self.subject();
        let cases = Cases::new()
            .on(JUST, move |args| match args {
                [func] => other.map(func).map(Value::from),
                _ => Err(wrong_function_args(1, args.len())),
            })
            .on(NOTHING, move |_| Ok(this.clone()));
        Maybe::try_from(match_with(&self.subject(), &cases)?)
    }
}

impl TryFrom<Value> for Maybe {
    type Error = EvalError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Union(u) if SharedUnion::ptr_eq(u.union_type(), maybe_union()) => Ok(Maybe(u)),
            other => Err(type_mismatch("Maybe", &describe(&other))),
        }
    }
}

impl From<Maybe> for Value {
    fn from(maybe: Maybe) -> Self {
        Value::Union(maybe.0)
    }
}

impl From<Option<Value>> for Maybe {
    fn from(option: Option<Value>) -> Self {
        option.map_or_else(Maybe::nothing, Maybe::just)
    }
}

impl From<Maybe> for Option<Value> {
    fn from(maybe: Maybe) -> Self {
        maybe.as_option().cloned()
    }
}

impl PartialEq for Maybe {
    fn eq(&self, other: &Self) -> bool {
        self.0.equals(&other.subject())
    }
}

impl fmt::Display for Maybe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Maybe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
