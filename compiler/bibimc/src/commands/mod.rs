//! Command handlers for the `bibim` CLI.
//!
//! Each command has a pure core that returns a value or a [`Diagnostic`]
//! (used by tests) and a file-level wrapper that reads the source, prints,
//! reports to stdout and yields the process exit code.

mod debug;
mod run;

use std::io::{self, Write};
use std::process::ExitCode;

use bibim_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use bibim_diagnostic::Diagnostic;

use crate::reporting::read_error_diagnostic;

pub use debug::{describe_program, describe_tokens, lex_file, parse_file};
pub use run::{parse_run_args, run_file, run_source, RunArgs};

/// Read a source file, mapping failures to an `E9001` diagnostic.
pub(crate) fn read_file(path: &str) -> Result<String, Diagnostic> {
    std::fs::read_to_string(path).map_err(|e| read_error_diagnostic(path, &e))
}

/// Emit `diagnostic` to stdout and return the failure exit code.
/// Program output goes to the same stream.
pub fn report(diagnostic: &Diagnostic, source: Option<(&str, &str)>) -> ExitCode {
    let stdout = io::stdout();
    let is_tty = io::IsTerminal::is_terminal(&stdout);
    report_to(TerminalEmitter::stdout(ColorMode::Auto, is_tty), diagnostic, source);
    ExitCode::FAILURE
}

/// Render `diagnostic` through `emitter`; with `source` (file name and text)
/// spans render as annotated snippets. Returns the emitter's writer.
pub(crate) fn report_to<W: Write>(
    emitter: TerminalEmitter<W>,
    diagnostic: &Diagnostic,
    source: Option<(&str, &str)>,
) -> W {
    let mut emitter = match source {
        Some((name, text)) => emitter.with_source(name, text),
        None => emitter,
    };
    emitter.emit(diagnostic);
    emitter.flush();
    emitter.into_inner()
}
