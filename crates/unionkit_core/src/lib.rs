//! Unionkit Core - runtime values, closed unions and exhaustive matching.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Heap`, `FunctionValue`, `CurriedFunction`)
//! - Deep structural equality (`deep_equal`)
//! - Curried partial application (`curry_to_arity`)
//! - The union factory (`union`, `SharedUnion`, `UnionValue`)
//! - The exhaustive matcher (`match_with`, `Cases`)
//! - Error types (`EvalError`, `EvalErrorKind`, `EvalResult`)
//!
//! # Example
//!
//! ```
//! use unionkit_core::{match_with, union, Cases, Value};
//!
//! let shape = union("Shape", [("Circle", 1), ("Square", 1)]);
//! let circle = shape.construct("Circle", vec![Value::int(2)]).unwrap();
//!
//! let cases = Cases::new()
//!     .on("Circle", |args| Ok(args[0].clone()))
//!     .on("Square", |_| Ok(Value::int(0)));
//! assert_eq!(match_with(&circle, &cases).unwrap(), Value::int(2));
//! ```

mod errors;
mod heap;
mod matcher;
mod union;
mod value;

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use heap::Heap;
pub use matcher::{match_with, Cases};
pub use union::{union, SharedUnion, UnionValue, Variant};
pub use value::{curry_to_arity, deep_equal, CurriedFunction, FunctionValue, Value};

// Error constructors for crates that build on the core
pub use errors::{
    handler_not_callable, incomplete_match, not_a_union, not_callable, type_mismatch,
    unknown_variant, unrecognized_variant, wrong_arg_count, wrong_function_args,
};
