//! Runtime values carried by unions, handlers and curried functions.
//!
//! # Heap Enforcement
//!
//! Heap payloads (`Str`, `List`, `Map`, union arguments) are wrapped in
//! `Heap<T>`, whose constructor is crate-private. Outside this crate
//! values are built through the factory methods on `Value`:
//!
//! ```text
//! let s = Value::string("hello");
//! let list = Value::list(vec![Value::int(1), Value::int(2)]);
//! let inc = Value::function("inc", |args| Ok(args[0].clone()));
//! ```
//!
//! # Thread Safety
//!
//! Every variant is immutable and `Send + Sync`; clones share heap storage.

mod equality;
mod function;

use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::{not_callable, EvalResult};
use crate::heap::Heap;
use crate::union::UnionValue;

pub use equality::deep_equal;
pub(crate) use equality::lists_equal;
pub use function::{curry_to_arity, CurriedFunction, FunctionValue};

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// Absent argument. Supplied by curried functions called with no
    /// arguments.
    Void,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Heap<String>),
    List(Heap<Vec<Value>>),
    /// String-keyed map. Key order is not significant.
    Map(Heap<FxHashMap<String, Value>>),
    /// Tagged union instance.
    Union(UnionValue),
    /// Native function.
    Function(FunctionValue),
    /// Partially applied function waiting for more arguments.
    Curried(CurriedFunction),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a map value from `(key, value)` pairs. Later keys win.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        let entries: FxHashMap<String, Value> =
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Value::Map(Heap::new(entries))
    }

    /// Wrap a native closure as a function value.
    ///
    /// The name only appears in diagnostics.
    pub fn function<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    {
        Value::Function(FunctionValue::new(name, func))
    }
}

// Accessors

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            #[allow(
                clippy::cast_precision_loss,
                reason = "int-to-float widening mirrors the single number kind of the source data"
            )]
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionValue> {
        match self {
            Value::Union(u) => Some(u),
            _ => None,
        }
    }

    /// Whether this value carries the union-instance marker.
    pub fn is_union(&self) -> bool {
        matches!(self, Value::Union(_))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_) | Value::Curried(_))
    }

    /// Whether this is a composite (key/value container) value.
    ///
    /// Composites only ever compare equal to other composites.
    pub fn is_composite(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_) | Value::Union(_))
    }

    /// Name of the runtime kind, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Void => "void",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Union(_) => "union",
            Value::Function(_) => "function",
            Value::Curried(_) => "curried function",
        }
    }

    /// Call this value with the given arguments.
    pub fn call(&self, args: Vec<Value>) -> EvalResult {
        match self {
            Value::Function(f) => f.call(&args),
            Value::Curried(c) => c.apply(args),
            _ => Err(not_callable(self.type_name())),
        }
    }
}

// Trait Implementations

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "void"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{:?}", &***s),
            Value::List(items) => {
                write!(f, "[")?;
                write_joined(f, items.iter())?;
                write!(f, "]")
            }
            Value::Map(map) => {
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                write!(f, "{{")?;
                for (i, (k, v)) in entries.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Union(u) => write!(f, "{u}"),
            Value::Function(func) => write!(f, "<function {}>", func.name()),
            Value::Curried(c) => write!(
                f,
                "<curried {} {}/{}>",
                c.name(),
                c.applied().len(),
                c.arity()
            ),
        }
    }
}

pub(crate) fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a Value>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "Void"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &***s),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Map(map) => write!(f, "Map({:?})", &**map),
            Value::Union(u) => write!(f, "Union({u})"),
            Value::Function(func) => write!(f, "Function({})", func.name()),
            Value::Curried(c) => write!(f, "Curried({}, {:?})", c.name(), c.applied()),
        }
    }
}

/// Structural equality; see [`deep_equal`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}
