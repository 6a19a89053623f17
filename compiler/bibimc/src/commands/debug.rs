//! Debug commands: `parse` and `lex` for inspecting the front end.

use std::fmt::Write as _;
use std::process::ExitCode;

use bibim_diagnostic::Diagnostic;

use super::{read_file, report};
use crate::reporting::{lex_error_diagnostic, parse_error_diagnostic};

/// One line per cell of the root container: `[key; value]`.
pub fn describe_program(source: &str) -> Result<String, Diagnostic> {
    let program = bibim_parse::parse(source).map_err(|e| parse_error_diagnostic(&e))?;
    let mut out = String::new();
    let _ = writeln!(out, "{} cells", program.len());
    for index in 0..program.len() {
        let Some(cell) = program.cell(index) else {
            break;
        };
        let _ = writeln!(out, "  [{}; {}]", cell.key(), cell.value());
    }
    Ok(out)
}

/// One line per token: kind and byte span.
pub fn describe_tokens(source: &str) -> Result<String, Diagnostic> {
    let tokens = bibim_lexer::lex(source).map_err(|e| lex_error_diagnostic(&e))?;
    let mut out = String::new();
    let _ = writeln!(out, "{} tokens", tokens.len());
    for token in &tokens {
        let _ = writeln!(out, "  {} @ {}", token.kind, token.span);
    }
    Ok(out)
}

/// Parse a file and print its cells.
pub fn parse_file(path: &str) -> ExitCode {
    show(path, describe_program)
}

/// Lex a file and print its tokens.
pub fn lex_file(path: &str) -> ExitCode {
    show(path, describe_tokens)
}

fn show(path: &str, describe: fn(&str) -> Result<String, Diagnostic>) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(diagnostic) => return report(&diagnostic, None),
    };
    match describe(&source) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(diagnostic) => report(&diagnostic, Some((path, &source))),
    }
}
