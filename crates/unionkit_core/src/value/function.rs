//! Native functions and curried partial application.

use std::fmt;
use std::sync::Arc;

use super::Value;
use crate::errors::EvalResult;
use crate::heap::Heap;

type NativeFn = dyn Fn(&[Value]) -> EvalResult + Send + Sync;

/// Native function value.
///
/// Equality is identity: two `FunctionValue`s are equal only when they
/// share the same closure allocation.
#[derive(Clone)]
pub struct FunctionValue {
    name: Heap<String>,
    func: Arc<NativeFn>,
}

impl FunctionValue {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    {
        FunctionValue {
            name: Heap::new(name.into()),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn call(&self, args: &[Value]) -> EvalResult {
        (self.func)(args)
    }

    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.func, &b.func)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionValue({})", self.name())
    }
}

/// Explicit partial-application accumulator.
///
/// Holds the target function, its arity and the arguments applied so far.
/// `apply` never mutates: each partial call returns a new accumulator, so
/// independent call chains starting from the same value never observe each
/// other's arguments.
#[derive(Clone)]
pub struct CurriedFunction {
    target: FunctionValue,
    arity: usize,
    applied: Heap<Vec<Value>>,
}

impl CurriedFunction {
    pub fn new(target: FunctionValue, arity: usize) -> Self {
        CurriedFunction {
            target,
            arity,
            applied: Heap::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        self.target.name()
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Arguments accumulated so far.
    pub fn applied(&self) -> &[Value] {
        &self.applied
    }

    /// Arguments still needed before the target runs.
    pub fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.applied.len())
    }

    /// Apply more arguments.
    ///
    /// A call with no arguments on a non-nullary function counts as one
    /// `Void` argument, so repeated empty calls always make progress.
    /// Once the accumulated count reaches the arity, the target is invoked
    /// with every accumulated argument, including any surplus.
    pub fn apply(&self, args: Vec<Value>) -> EvalResult {
        let supplied = if self.arity != 0 && args.is_empty() {
            vec![Value::Void]
        } else {
            args
        };

        let mut all = Vec::with_capacity(self.applied.len().saturating_add(supplied.len()));
        all.extend(self.applied.iter().cloned());
        all.extend(supplied);

        if all.len() >= self.arity {
            self.target.call(&all)
        } else {
            Ok(Value::Curried(CurriedFunction {
                target: self.target.clone(),
                arity: self.arity,
                applied: Heap::new(all),
            }))
        }
    }

    pub(crate) fn ptr_eq(a: &Self, b: &Self) -> bool {
        FunctionValue::ptr_eq(&a.target, &b.target) && Heap::ptr_eq(&a.applied, &b.applied)
    }
}

impl fmt::Debug for CurriedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurriedFunction")
            .field("name", &self.name())
            .field("arity", &self.arity)
            .field("applied", &self.applied())
            .finish()
    }
}

/// Wrap `func` so it can be applied across any number of calls until
/// `arity` arguments have accumulated.
pub fn curry_to_arity(func: FunctionValue, arity: usize) -> Value {
    Value::Curried(CurriedFunction::new(func, arity))
}
