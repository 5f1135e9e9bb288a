//! Union factory: closed sets of named variants with fixed arity.
//!
//! A union is declared once with `union(name, variants)`. The resulting
//! `SharedUnion` owns the ordered tag set and hands out curried
//! constructors; every instance it builds points back at the same shared
//! declaration, which is how `match_with` validates exhaustiveness.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::errors::{unknown_variant, wrong_arg_count, EvalResult};
use crate::heap::Heap;
use crate::value::{curry_to_arity, lists_equal, write_joined, FunctionValue, Value};

/// One declared variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub arity: usize,
}

/// Declaration of a closed union. Immutable after creation.
#[derive(Debug)]
struct UnionType {
    name: String,
    variants: Vec<Variant>,
    positions: FxHashMap<String, usize>,
}

/// Thread-safe shared handle to a union declaration.
///
/// Cloning shares the declaration. Two handles denote the same union only
/// when they point at the same allocation.
#[derive(Clone)]
pub struct SharedUnion(Arc<UnionType>);

/// Declare a union from `(variant, arity)` pairs.
///
/// Repeating a variant name replaces its arity but keeps its original
/// position in the tag set.
pub fn union<S: Into<String>>(
    name: impl Into<String>,
    variants: impl IntoIterator<Item = (S, usize)>,
) -> SharedUnion {
    let name = name.into();
    let mut declared: Vec<Variant> = Vec::new();
    let mut positions: FxHashMap<String, usize> = FxHashMap::default();

    for (variant, arity) in variants {
        let variant = variant.into();
        if let Some(&index) = positions.get(&variant) {
            declared[index].arity = arity;
        } else {
            positions.insert(variant.clone(), declared.len());
            declared.push(Variant {
                name: variant,
                arity,
            });
        }
    }

    tracing::debug!(union = %name, variants = declared.len(), "declared union");

    SharedUnion(Arc::new(UnionType {
        name,
        variants: declared,
        positions,
    }))
}

impl SharedUnion {
    /// Diagnostic name of the union.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Declared variants in declaration order.
    pub fn variants(&self) -> &[Variant] {
        &self.0.variants
    }

    /// The tag set, in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.variants.iter().map(|v| v.name.as_str())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.positions.contains_key(tag)
    }

    pub fn arity(&self, tag: &str) -> Option<usize> {
        self.position(tag).map(|i| self.0.variants[i].arity)
    }

    fn position(&self, tag: &str) -> Option<usize> {
        self.0.positions.get(tag).copied()
    }

    /// Curried constructor for `tag`.
    ///
    /// Fully applying the returned value yields a `Value::Union`. Applying
    /// more arguments than the declared arity is an error, since instances
    /// always carry exactly `arity` arguments.
    pub fn constructor(&self, tag: &str) -> EvalResult {
        let Some(index) = self.position(tag) else {
            return Err(unknown_variant(self.name(), tag));
        };
        let arity = self.0.variants[index].arity;
        let union = self.clone();
        let build = FunctionValue::new(tag, move |args: &[Value]| {
            if args.len() != arity {
                return Err(wrong_arg_count(
                    &union.0.variants[index].name,
                    arity,
                    args.len(),
                ));
            }
            Ok(Value::Union(UnionValue {
                union: union.clone(),
                tag: index,
                args: Heap::new(args.to_vec()),
            }))
        });
        Ok(curry_to_arity(build, arity))
    }

    /// Apply the constructor for `tag` to `args`.
    ///
    /// Fewer arguments than the arity yield a partially applied
    /// constructor rather than an instance.
    pub fn construct(&self, tag: &str, args: Vec<Value>) -> EvalResult {
        self.constructor(tag)?.call(args)
    }

    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for SharedUnion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "union {} {{ ", self.name())?;
        for (i, v) in self.variants().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}/{}", v.name, v.arity)?;
        }
        write!(f, " }}")
    }
}

/// A tagged instance: variant tag plus its positional arguments.
#[derive(Clone)]
pub struct UnionValue {
    union: SharedUnion,
    tag: usize,
    args: Heap<Vec<Value>>,
}

impl UnionValue {
    pub fn tag(&self) -> &str {
        &self.union.0.variants[self.tag].name
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// The declaration this instance was built from.
    pub fn union_type(&self) -> &SharedUnion {
        &self.union
    }

    /// Same tag name and structurally equal arguments.
    ///
    /// Instances from separately declared unions compare equal when their
    /// tags and arguments agree.
    pub fn equals(&self, other: &Value) -> bool {
        match other {
            Value::Union(other) => self.equals_union(other),
            _ => false,
        }
    }

    pub(crate) fn equals_union(&self, other: &UnionValue) -> bool {
        self.tag() == other.tag()
            && (Heap::ptr_eq(&self.args, &other.args) || lists_equal(&self.args, &other.args))
    }

    /// Whether both handles share the same argument storage.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        SharedUnion::ptr_eq(&a.union, &b.union) && Heap::ptr_eq(&a.args, &b.args)
    }
}

impl fmt::Display for UnionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())?;
        if !self.args.is_empty() {
            write!(f, "(")?;
            write_joined(f, self.args.iter())?;
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Debug for UnionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{self}", self.union.name())
    }
}
