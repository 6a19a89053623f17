//! Diagnostic rendering.
//!
//! Converts each phase's structured error into a [`Diagnostic`] with an
//! error code, a message prefixed by the phase (`parse error:` or
//! `runtime error:`), a label at the offending span and, where useful, a
//! note on how to proceed.

mod eval;
mod parse;

use std::io;

use bibim_diagnostic::{Diagnostic, ErrorCode};

pub use eval::eval_error_diagnostic;
pub use parse::{lex_error_diagnostic, parse_error_diagnostic};

/// The source file could not be read.
pub fn read_error_diagnostic(path: &str, err: &io::Error) -> Diagnostic {
    let message = match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    };
    Diagnostic::error(ErrorCode::E9001).with_message(message)
}

/// Bad command-line arguments.
pub fn usage_diagnostic(message: impl Into<String>) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9002)
        .with_message(message)
        .with_note("run `bibim help` for usage")
}
