use bibim_diagnostic::{Diagnostic, ErrorCode};
use bibim_eval::{EvalError, EvalErrorKind};

fn error_code(kind: &EvalErrorKind) -> ErrorCode {
    match kind {
        EvalErrorKind::Construction => ErrorCode::E6001,
        EvalErrorKind::TypeMismatch { .. } => ErrorCode::E6002,
        EvalErrorKind::MalformedProgram { .. } => ErrorCode::E6003,
        EvalErrorKind::Codec { .. } => ErrorCode::E6004,
        EvalErrorKind::IoChannelType { .. } => ErrorCode::E6005,
        EvalErrorKind::Io { .. } => ErrorCode::E6006,
        EvalErrorKind::DepthExceeded { .. } => ErrorCode::E6007,
        EvalErrorKind::LookupMiss { .. } => ErrorCode::E6008,
    }
}

/// Runtime error, labelled at the cell that was executing.
pub fn eval_error_diagnostic(err: &EvalError) -> Diagnostic {
    let mut diagnostic = Diagnostic::error(error_code(&err.kind))
        .with_message(format!("runtime error: {}", err.kind));

    match (err.span, &err.position) {
        (Some(span), Some(position)) => {
            diagnostic = diagnostic.with_label(span, format!("while executing position {position}"));
        }
        (Some(span), None) => {
            diagnostic = diagnostic.with_label(span, "while choosing the first cell");
        }
        (None, Some(position)) => {
            diagnostic = diagnostic.with_note(format!("at position {position}"));
        }
        (None, None) => {}
    }

    match err.kind {
        EvalErrorKind::Construction
        | EvalErrorKind::TypeMismatch { .. }
        | EvalErrorKind::MalformedProgram { .. } => {
            diagnostic.with_note("without --strict this value would read as null")
        }
        EvalErrorKind::DepthExceeded { .. } => diagnostic
            .with_note("a cell may be reading itself; raise the limit with --max-depth=N"),
        _ => diagnostic,
    }
}
