//! Success or failure: `Ok(value)` or `Err(error)`.

use std::fmt;
use std::sync::OnceLock;

use unionkit_core::{
    match_with, type_mismatch, union, wrong_function_args, Cases, EvalError, EvalResult,
    SharedUnion, UnionValue, Value,
};

use crate::monad::{describe, Monad};

const ERR: &str = "Err";
const OK: &str = "Ok";

static OUTCOME: OnceLock<SharedUnion> = OnceLock::new();

/// The process-wide `Result` declaration.
pub fn outcome_union() -> &'static SharedUnion {
    OUTCOME.get_or_init(|| union("Result", [(ERR, 1), (OK, 1)]))
}

/// A `Result` union instance.
#[derive(Clone)]
pub struct Outcome(UnionValue);

impl Outcome {
    pub fn ok(value: Value) -> Self {
        Self::build(OK, value)
    }

    pub fn err(error: Value) -> Self {
        Self::build(ERR, error)
    }

    fn build(tag: &str, payload: Value) -> Self {
        match outcome_union()
            .construct(tag, vec![payload])
            .and_then(Outcome::try_from)
        {
            Ok(outcome) => outcome,
            Err(err) => unreachable!("Result declares {tag} with arity 1: {err}"),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.0.tag() == OK
    }

    pub fn is_err(&self) -> bool {
        self.0.tag() == ERR
    }

    fn payload(&self) -> &Value {
        match self.0.args() {
            [value] => value,
            _ => unreachable!("Ok and Err carry exactly one argument"),
        }
    }

    /// Native view for compiler-checked matching.
    pub fn as_result(&self) -> Result<&Value, &Value> {
        if self.is_ok() {
            Ok(self.payload())
        } else {
            Err(self.payload())
        }
    }

    pub fn as_union(&self) -> &UnionValue {
        &self.0
    }

    /// Transform the error payload; successes pass through unchanged.
    pub fn map_error(&self, func: &Value) -> EvalResult<Self> {
        let func = func.clone();
        let this = self.subject();
        let cases = Cases::new()
            .on(ERR, move |args| {
                Ok(Outcome::err(func.call(args.to_vec())?).into())
            })
            .on(OK, move |_| Ok(this.clone()));
        Outcome::try_from(match_with(&self.subject(), &cases)?)
    }

    fn subject(&self) -> Value {
        Value::Union(self.0.clone())
    }
}

impl Monad for Outcome {
    fn of(value: Value) -> Self {
        Outcome::ok(value)
    }

    fn map(&self, func: &Value) -> EvalResult<Self> {
        let func = func.clone();
        let this = self.subject();
        let cases = Cases::new()
            .on(ERR, move |_| Ok(this.clone()))
            .on(OK, move |args| {
                Ok(Outcome::ok(func.call(args.to_vec())?).into())
            });
        Outcome::try_from(match_with(&self.subject(), &cases)?)
    }

    fn chain(&self, func: &Value) -> EvalResult<Self> {
        let this = self.subject();
        let cases = Cases::new()
            .on(ERR, move |_| Ok(this.clone()))
            .case(OK, func.clone());
        Outcome::try_from(match_with(&self.subject(), &cases)?)
    }

    fn ap(&self, other: &Self) -> EvalResult<Self> {
        let other = other.clone();
        let this = self.subject();
        let cases = Cases::new()
            .on(ERR, move |_| Ok(this.clone()))
            .on(OK, move |args| match args {
                [func] => other.map(func).map(Value::from),
                _ => Err(wrong_function_args(1, args.len())),
            });
        Outcome::try_from(match_with(&self.subject(), &cases)?)
    }
}

impl TryFrom<Value> for Outcome {
    type Error = EvalError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Union(u) if SharedUnion::ptr_eq(u.union_type(), outcome_union()) => {
                Ok(Outcome(u))
            }
            other => Err(type_mismatch("Result", &describe(&other))),
        }
    }
}

impl From<Outcome> for Value {
    fn from(outcome: Outcome) -> Self {
        Value::Union(outcome.0)
    }
}

impl From<Result<Value, Value>> for Outcome {
    fn from(result: Result<Value, Value>) -> Self {
        match result {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::err(error),
        }
    }
}

impl From<Outcome> for Result<Value, Value> {
    fn from(outcome: Outcome) -> Self {
        outcome.as_result().map(Clone::clone).map_err(Clone::clone)
    }
}

impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        self.0.equals(&other.subject())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
