//! Error types for union construction, matching and function calls.
//!
//! `EvalErrorKind` carries the structured category; factory functions
//! (e.g. `incomplete_match()`) are the public way to build errors so
//! messages stay consistent across crates.

use crate::value::Value;

/// Result of evaluating or constructing a value.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Typed error category.
///
/// The first four variants are the match taxonomy: they surface programmer
/// error at the call site and are never retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Matching
    #[error("cannot pattern match on a non-union value of type {type_name}")]
    NotAUnion { type_name: String },
    #[error("unrecognized variant `{variant}` in match on union {union}")]
    UnrecognizedVariant { union: String, variant: String },
    #[error("non-exhaustive match on union {union}: missing {}", .missing.join(", "))]
    IncompleteMatch { union: String, missing: Vec<String> },
    #[error("handler for variant `{variant}` is not callable ({type_name})")]
    HandlerNotCallable { variant: String, type_name: String },

    // Construction
    #[error("union {union} has no variant `{variant}`")]
    UnknownVariant { union: String, variant: String },

    // Calls
    #[error("{} expects {expected} argument{}, got {got}", display_name(.name), plural(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("{type_name} is not callable")]
    NotCallable { type_name: String },
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    /// Failure raised by user-supplied functions.
    #[error("{message}")]
    Custom { message: String },
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "function"
    } else {
        name
    }
}

fn plural(n: &usize) -> &'static str {
    if *n == 1 {
        ""
    } else {
        "s"
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Prefer the factory functions when a structured kind exists.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        Self { kind }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Whether this error came from `match_with` validation.
    pub fn is_match_error(&self) -> bool {
        matches!(
            self.kind,
            EvalErrorKind::NotAUnion { .. }
                | EvalErrorKind::UnrecognizedVariant { .. }
                | EvalErrorKind::IncompleteMatch { .. }
                | EvalErrorKind::HandlerNotCallable { .. }
        )
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

// Match errors

/// Matched value is not a union instance.
#[cold]
pub fn not_a_union(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAUnion {
        type_name: type_name.to_string(),
    })
}

/// A case names a variant the union never declared.
#[cold]
pub fn unrecognized_variant(union: &str, variant: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnrecognizedVariant {
        union: union.to_string(),
        variant: variant.to_string(),
    })
}

/// Declared variants without a case.
#[cold]
pub fn incomplete_match(union: &str, missing: Vec<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IncompleteMatch {
        union: union.to_string(),
        missing,
    })
}

/// The selected handler is not a function.
#[cold]
pub fn handler_not_callable(variant: &str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::HandlerNotCallable {
        variant: variant.to_string(),
        type_name: type_name.to_string(),
    })
}

// Construction errors

/// Constructor requested for an undeclared variant.
#[cold]
pub fn unknown_variant(union: &str, variant: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownVariant {
        union: union.to_string(),
        variant: variant.to_string(),
    })
}

// Call errors

/// Wrong number of arguments for a named function or constructor.
#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// Wrong number of arguments for an anonymous function.
#[cold]
pub fn wrong_function_args(expected: usize, got: usize) -> EvalError {
    wrong_arg_count("", expected, got)
}

/// Value called as a function.
#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

/// A value of the wrong kind where a specific kind was required.
#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}
