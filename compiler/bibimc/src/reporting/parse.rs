use bibim_diagnostic::{Diagnostic, ErrorCode};
use bibim_lexer::{LexError, LexErrorKind};
use bibim_parse::{ParseError, ParseErrorKind};

pub fn lex_error_diagnostic(err: &LexError) -> Diagnostic {
    let (code, label) = match err.kind {
        LexErrorKind::UnexpectedCharacter => (ErrorCode::E0001, "not part of any token"),
        LexErrorKind::UnterminatedComment => (ErrorCode::E0002, "comment opened here is never closed"),
    };
    let diagnostic = Diagnostic::error(code)
        .with_message(format!("parse error: {err}"))
        .with_label(err.span, label);
    match err.kind {
        LexErrorKind::UnterminatedComment => diagnostic.with_note("comments are written `~# ... #~`"),
        LexErrorKind::UnexpectedCharacter => diagnostic,
    }
}

pub fn parse_error_diagnostic(err: &ParseError) -> Diagnostic {
    let message = format!("parse error: {err}");
    match &err.kind {
        ParseErrorKind::Lex(lex) => lex_error_diagnostic(lex),
        ParseErrorKind::UnexpectedToken { expected, .. } => Diagnostic::error(ErrorCode::E1001)
            .with_message(message)
            .with_label(err.span, format!("expected {expected}")),
        ParseErrorKind::UnexpectedEof { expected } => Diagnostic::error(ErrorCode::E1002)
            .with_message(message)
            .with_label(err.span, format!("expected {expected} here")),
        ParseErrorKind::InvalidAssignmentTarget => Diagnostic::error(ErrorCode::E1003)
            .with_message(message)
            .with_label(err.span, "cannot assign to this")
            .with_note("assignments write a cell: `container : key = value`"),
        ParseErrorKind::TrailingInput { .. } => Diagnostic::error(ErrorCode::E1004)
            .with_message(message)
            .with_label(err.span, "the program container already ended")
            .with_note("a program is a single `{ ... }` container"),
    }
}
