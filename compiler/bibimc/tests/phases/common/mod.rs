//! Shared helpers for phase tests.

use bibim_diagnostic::Diagnostic;
use bibim_eval::{buffer_handler, EvalConfig, RunSummary};
use bibimc::commands::run_source;

/// Run `source` leniently with `input`; return captured output.
pub fn run_program(source: &str, input: &str) -> String {
    let (result, output) = run_with(source, input, EvalConfig::default());
    result.expect("program should run");
    output
}

/// Run `source` with an explicit configuration.
pub fn run_with(
    source: &str,
    input: &str,
    config: EvalConfig,
) -> (Result<RunSummary, Diagnostic>, String) {
    let io = buffer_handler(input);
    let result = run_source(source, config, io.clone());
    (result, io.output())
}

/// Display form of the value of the single cell in `{[0; <expr>]}`.
pub fn cell_value(expr: &str) -> String {
    let program = bibim_parse::parse(&format!("{{[0; {expr}]}}")).unwrap();
    program.cell(0).unwrap().value().to_string()
}
