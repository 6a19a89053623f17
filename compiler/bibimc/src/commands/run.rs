//! The `run` command: parse and execute a Bibim program.

use std::process::ExitCode;

use bibim_diagnostic::Diagnostic;
use bibim_eval::{stdio_handler, ErrorMode, EvalConfig, RunSummary, SharedIoHandler};
use tracing::debug;

use super::{read_file, report};
use crate::reporting::{eval_error_diagnostic, parse_error_diagnostic, usage_diagnostic};

/// Parsed `run` arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunArgs {
    pub path: String,
    pub config: EvalConfig,
}

/// Parse `<file> [--strict] [--max-depth=N]` in any order.
pub fn parse_run_args(args: &[String]) -> Result<RunArgs, Diagnostic> {
    let mut path = None;
    let mut config = EvalConfig::default();

    for arg in args {
        if arg == "--strict" {
            config = config.with_mode(ErrorMode::Strict);
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            let depth = value
                .parse::<usize>()
                .ok()
                .filter(|depth| *depth > 0)
                .ok_or_else(|| {
                    usage_diagnostic(format!(
                        "--max-depth expects a positive integer, found `{value}`"
                    ))
                })?;
            config = config.with_max_depth(depth);
        } else if arg.starts_with('-') {
            return Err(usage_diagnostic(format!("unknown option `{arg}`")));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(usage_diagnostic(format!("unexpected argument `{arg}`")));
        }
    }

    let path = path.ok_or_else(|| usage_diagnostic("missing file path"))?;
    Ok(RunArgs { path, config })
}

/// Parse and run `source`, reading and writing through `io`.
pub fn run_source(
    source: &str,
    config: EvalConfig,
    io: SharedIoHandler,
) -> Result<RunSummary, Diagnostic> {
    let program = bibim_parse::parse(source).map_err(|e| parse_error_diagnostic(&e))?;
    bibim_eval::run(&program, config, io).map_err(|e| eval_error_diagnostic(&e))
}

/// Run a program file against stdin and stdout.
pub fn run_file(args: &RunArgs) -> ExitCode {
    let source = match read_file(&args.path) {
        Ok(source) => source,
        Err(diagnostic) => return report(&diagnostic, None),
    };
    match run_source(&source, args.config, stdio_handler()) {
        Ok(summary) => {
            debug!(path = %args.path, steps = summary.steps, "run finished");
            ExitCode::SUCCESS
        }
        Err(diagnostic) => report(&diagnostic, Some((&args.path, &source))),
    }
}
