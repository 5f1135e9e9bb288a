//! Deep structural equality over runtime values.

use rustc_hash::FxHashMap;

use super::{CurriedFunction, FunctionValue, Value};
use crate::heap::Heap;

/// Deep, key-order-insensitive equality.
///
/// - Identical scalars and shared allocations are equal immediately.
/// - Lists, maps and union instances are composite: equal when they have
///   the same number of keys and every key of `a` exists in `b` with a
///   deeply equal value. A list is keyed by its stringified indices, so
///   `[x, y]` equals the map `{"0": x, "1": y}`.
/// - Union instances additionally require the same tag name; the declaring
///   union is not consulted.
/// - A composite never equals a scalar. Functions compare by identity.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    if a.is_composite() || b.is_composite() {
        return composites_equal(a, b);
    }
    match (a, b) {
        (Value::Void, Value::Void) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        #[allow(clippy::float_cmp, reason = "identity semantics: NaN is never equal")]
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Int(n), Value::Float(f)) | (Value::Float(f), Value::Int(n)) => {
            int_equals_float(*n, *f)
        }
        (Value::Str(x), Value::Str(y)) => Heap::ptr_eq(x, y) || **x == **y,

        // Identity-only
        (Value::Function(x), Value::Function(y)) => FunctionValue::ptr_eq(x, y),
        (Value::Curried(x), Value::Curried(y)) => CurriedFunction::ptr_eq(x, y),

        _ => false,
    }
}

/// At least one side is composite; a scalar on the other side never matches.
fn composites_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::List(x), Value::List(y)) => Heap::ptr_eq(x, y) || lists_equal(x, y),
        (Value::Map(x), Value::Map(y)) => Heap::ptr_eq(x, y) || maps_equal(x, y),
        (Value::List(list), Value::Map(map)) | (Value::Map(map), Value::List(list)) => {
            list_equals_map(list, map)
        }
        (Value::Union(x), Value::Union(y)) => x.equals_union(y),
        _ => false,
    }
}

/// Exact comparison: the float must be integral and inside the `i64` range.
#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "range is checked before the cast; -2^63 is exact in f64"
)]
fn int_equals_float(n: i64, f: f64) -> bool {
    const LOWER: f64 = i64::MIN as f64;
    f.fract() == 0.0 && f >= LOWER && f < -LOWER && f as i64 == n
}

pub(crate) fn lists_equal(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
}

fn maps_equal(a: &FxHashMap<String, Value>, b: &FxHashMap<String, Value>) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(key, x)| b.get(key).is_some_and(|y| deep_equal(x, y)))
}

fn list_equals_map(list: &[Value], map: &FxHashMap<String, Value>) -> bool {
    list.len() == map.len()
        && list.iter().enumerate().all(|(i, x)| {
            map.get(&i.to_string())
                .is_some_and(|y| deep_equal(x, y))
        })
}

#[cfg(test)]
mod tests;
