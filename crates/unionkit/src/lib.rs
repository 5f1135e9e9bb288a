//! Unionkit - closed tagged unions with exhaustive matching.
//!
//! This crate re-exports the pieces most programs need:
//! - [`union`] declares a closed set of variants and hands out curried
//!   constructors ([`SharedUnion::constructor`]).
//! - [`match_with`] dispatches an instance to its handler, refusing
//!   incomplete or mistyped case tables before running anything.
//! - [`Maybe`] and [`Outcome`] are unions declared once per process with
//!   `map`/`chain`/`ap` from the [`Monad`] trait.
//! - [`Task`] describes lazy, re-runnable asynchronous work, batched
//!   concurrently with [`all`] or in order with [`sequence`].
//!
//! # Example
//!
//! ```
//! use unionkit::prelude::*;
//!
//! let shape = union("Shape", [("Circle", 1), ("Rect", 2)]);
//! let rect = shape.constructor("Rect").unwrap();
//! let half = rect.call(vec![Value::int(2)]).unwrap();
//! let full = half.call(vec![Value::int(3)]).unwrap();
//!
//! let area = Cases::new()
//!     .on("Circle", |args| Ok(Value::int(3 * args[0].as_int().unwrap_or(0).pow(2))))
//!     .on("Rect", |args| {
//!         let (w, h) = (args[0].as_int().unwrap_or(0), args[1].as_int().unwrap_or(0));
//!         Ok(Value::int(w * h))
//!     });
//! assert_eq!(match_with(&full, &area).unwrap(), Value::int(6));
//! ```
//!
//! # Debugging
//!
//! Call [`init_tracing`] and set `RUST_LOG`:
//! - `RUST_LOG=unionkit_core=debug` - union declarations and match dispatch
//! - `RUST_LOG=unionkit_core=trace,unionkit_task=trace` - every call and run

use std::sync::Once;

pub use unionkit_adt::{maybe_union, outcome_union, Maybe, Monad, Outcome};
pub use unionkit_core::{
    curry_to_arity, deep_equal, match_with, union, Cases, CurriedFunction, EvalError,
    EvalErrorKind, EvalResult, FunctionValue, Heap, SharedUnion, UnionValue, Value, Variant,
};
pub use unionkit_task::{all, append, sequence, Task};

/// Everything needed to declare, construct and match unions.
pub mod prelude {
    pub use crate::{
        curry_to_arity, deep_equal, match_with, union, Cases, EvalError, EvalResult, Maybe,
        Monad, Outcome, SharedUnion, Task, Value,
    };
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, and
/// leaves an already-installed global subscriber in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if installed.is_err() {
                tracing::debug!("global subscriber already set; keeping it");
            }
        }
    });
}

#[cfg(test)]
mod tests;
