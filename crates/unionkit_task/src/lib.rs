//! Unionkit Task - lazy, re-runnable asynchronous computations.
//!
//! A `Task` is a description of deferred work. Building one (and composing
//! it with `map`, `chain`, `map2`, `on_error`, ...) performs no work;
//! only [`Task::run`] starts the effect, and every call to `run` starts it
//! again from scratch. Failures travel on their own channel until the
//! caller awaits the handle returned by `run`.
//!
//! Concurrency for [`Task::all`] comes from the `futures` join
//! combinators; no executor is bundled, so tasks run on whatever runtime
//! drives the returned future. There is no cancellation or timeout.

mod batch;
mod task;

pub use batch::{all, append, sequence};
pub use task::Task;
