//! Runtime errors.
//!
//! [`EvalErrorKind`] names the failure; [`EvalError`] adds where it happened
//! (the position being executed and the source span of its cell). Factory
//! functions are the construction API so call sites stay one line.

use std::fmt;
use std::io;

use bibim_ir::{Number, Span, Value};

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Typed runtime failure category.
///
/// Whether a kind aborts the run depends on the active
/// [`ErrorMode`](crate::ErrorMode).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// A number with a zero denominator, usually `x / 0`.
    #[error("zero cannot be a denominator")]
    Construction,

    #[error("expected {expected}, found {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("no cell with key {key}")]
    LookupMiss { key: String },

    /// A cell key evaluated to something other than a number or null.
    #[error("cell key must be a number, found {got}")]
    MalformedProgram { got: &'static str },

    #[error("cannot convert container to text: {reason}")]
    Codec { reason: String },

    #[error("the I/O channel only accepts containers, found {got}")]
    IoChannelType { got: &'static str },

    #[error("I/O failure: {message}")]
    Io { message: String },

    #[error("evaluation nested deeper than {limit} operators")]
    DepthExceeded { limit: usize },
}

/// A runtime error with its location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Position register value when the error surfaced.
    pub position: Option<Number>,
    /// Span of the cell being executed or scanned.
    pub span: Option<Span>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            position: None,
            span: None,
        }
    }

    /// Attach a position unless an inner frame already did.
    #[must_use]
    pub fn with_position(mut self, position: Option<&Number>) -> Self {
        if self.position.is_none() {
            self.position = position.cloned();
        }
        self
    }

    /// Attach a span unless an inner frame already did.
    #[must_use]
    pub fn with_span(mut self, span: Option<Span>) -> Self {
        if self.span.is_none() {
            self.span = span;
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(position) = &self.position {
            write!(f, " (at position {position})")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

#[cold]
pub fn construction_error() -> EvalError {
    EvalErrorKind::Construction.into()
}

#[cold]
pub fn type_mismatch(expected: &'static str, got: &Value) -> EvalError {
    EvalErrorKind::TypeMismatch {
        expected,
        got: got.type_name(),
    }
    .into()
}

#[cold]
pub fn lookup_miss(key: &Number) -> EvalError {
    EvalErrorKind::LookupMiss {
        key: key.to_string(),
    }
    .into()
}

#[cold]
pub fn malformed_key(got: &Value) -> EvalError {
    EvalErrorKind::MalformedProgram {
        got: got.type_name(),
    }
    .into()
}

#[cold]
pub fn codec_error(reason: impl Into<String>) -> EvalError {
    EvalErrorKind::Codec {
        reason: reason.into(),
    }
    .into()
}

#[cold]
pub fn io_channel_type(got: &Value) -> EvalError {
    EvalErrorKind::IoChannelType {
        got: got.type_name(),
    }
    .into()
}

#[cold]
pub fn io_failure(err: &io::Error) -> EvalError {
    EvalErrorKind::Io {
        message: err.to_string(),
    }
    .into()
}

#[cold]
pub fn depth_exceeded(limit: usize) -> EvalError {
    EvalErrorKind::DepthExceeded { limit }.into()
}
