//! Unionkit ADT - `Maybe` and `Outcome` built on the union factory.
//!
//! Both types are ordinary unions declared once per process and matched
//! with `match_with`; absence and failure are data, never errors.
//! `Outcome` is the success/failure union (tags `Ok` and `Err`), named so
//! it does not shadow `std::result::Result`.
//!
//! The shared `map`/`chain`/`ap` contract lives in the [`Monad`] trait.

mod maybe;
mod monad;
mod outcome;

pub use maybe::{maybe_union, Maybe};
pub use monad::Monad;
pub use outcome::{outcome_union, Outcome};
