//! Capability shared by the union-backed containers.

use unionkit_core::{wrong_function_args, EvalError, EvalResult, Value};

/// `of`/`map`/`chain`/`ap` over a union-backed container.
///
/// Callbacks are runtime function values, so handlers built elsewhere
/// (curried constructors, functions stored in containers) compose the
/// same way as native closures. `map_fn` and `chain_fn` wrap a closure
/// for the common case.
pub trait Monad: Sized + Clone + Into<Value> + TryFrom<Value, Error = EvalError> {
    /// Lift a plain value into the success/presence variant.
    fn of(value: Value) -> Self;

    /// Transform the payload of the success/presence variant.
    fn map(&self, func: &Value) -> EvalResult<Self>;

    /// Feed the payload to `func`, which must return the same container.
    fn chain(&self, func: &Value) -> EvalResult<Self>;

    /// Treat the payload as a function and map it over `other`.
    fn ap(&self, other: &Self) -> EvalResult<Self>;

    fn map_fn<F>(&self, func: F) -> EvalResult<Self>
    where
        F: Fn(Value) -> EvalResult + Send + Sync + 'static,
    {
        self.map(&unary("map", func))
    }

    fn chain_fn<F>(&self, func: F) -> EvalResult<Self>
    where
        F: Fn(Value) -> EvalResult<Self> + Send + Sync + 'static,
    {
        self.chain(&unary("chain", move |value| func(value).map(Into::into)))
    }
}

/// Wrap a one-argument closure as a function value.
pub(crate) fn unary<F>(name: &str, func: F) -> Value
where
    F: Fn(Value) -> EvalResult + Send + Sync + 'static,
{
    Value::function(name, move |args| match args {
        [value] => func(value.clone()),
        _ => Err(wrong_function_args(1, args.len())),
    })
}

/// Describe a value for a `TypeMismatch` message.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Union(u) => u.union_type().name().to_string(),
        other => other.type_name().to_string(),
    }
}
