//! Error-handling policy for evaluation.
//!
//! [`ErrorMode`] decides, per error kind, whether the safe evaluation seam
//! swallows an error into `Null` or lets it abort the run. [`EvalConfig`]
//! bundles the mode with the nesting limit.

use crate::EvalErrorKind;

/// Nesting limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// How recoverable runtime errors are treated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorMode {
    /// Type, construction and malformed-key errors become `Null`.
    #[default]
    Lenient,
    /// Every error except a missing key aborts the run.
    Strict,
}

impl ErrorMode {
    /// Whether an error of this kind is replaced by `Null` at the safe seam.
    ///
    /// A missing key is absorbed in every mode. Codec, I/O and depth errors
    /// never are.
    #[inline]
    pub fn absorbs(self, kind: &EvalErrorKind) -> bool {
        match kind {
            EvalErrorKind::LookupMiss { .. } => true,
            EvalErrorKind::Construction
            | EvalErrorKind::TypeMismatch { .. }
            | EvalErrorKind::MalformedProgram { .. } => matches!(self, Self::Lenient),
            EvalErrorKind::Codec { .. }
            | EvalErrorKind::IoChannelType { .. }
            | EvalErrorKind::Io { .. }
            | EvalErrorKind::DepthExceeded { .. } => false,
        }
    }

    pub fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Settings for one run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EvalConfig {
    pub mode: ErrorMode,
    /// Maximum number of nested operator evaluations.
    pub max_depth: usize,
}

impl EvalConfig {
    pub fn strict() -> Self {
        EvalConfig {
            mode: ErrorMode::Strict,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ErrorMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            mode: ErrorMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
