//! Bibim interpreter CLI.

use std::path::Path;
use std::process::ExitCode;

use bibimc::commands::{lex_file, parse_file, parse_run_args, report, run_file};
use bibimc::reporting::usage_diagnostic;

fn main() -> ExitCode {
    bibimc::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    match command.as_str() {
        "run" => match parse_run_args(&args[2..]) {
            Ok(run) => run_file(&run),
            Err(diagnostic) => report(&diagnostic, None),
        },
        "parse" => match args.get(2) {
            Some(path) => parse_file(path),
            None => report(&usage_diagnostic("Usage: bibim parse <file.bibim>"), None),
        },
        "lex" => match args.get(2) {
            Some(path) => lex_file(path),
            None => report(&usage_diagnostic("Usage: bibim lex <file.bibim>"), None),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("bibim {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            // A bare source file runs it, flags included.
            if Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("bibim"))
            {
                match parse_run_args(&args[1..]) {
                    Ok(run) => run_file(&run),
                    Err(diagnostic) => report(&diagnostic, None),
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                ExitCode::FAILURE
            }
        }
    }
}

fn print_usage() {
    println!("Bibim interpreter");
    println!();
    println!("Usage: bibim <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.bibim>     Run a Bibim program");
    println!("  parse <file.bibim>   Parse and list the program's cells");
    println!("  lex <file.bibim>     Tokenize and list tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --strict             Abort on type and arithmetic errors instead of reading null");
    println!("  --max-depth=<n>      Nesting limit for evaluation (default: 10000)");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=bibim_eval=debug   Trace every scheduler step to stderr");
    println!();
    println!("Examples:");
    println!("  bibim run hello.bibim");
    println!("  bibim hello.bibim --strict");
    println!("  echo hi | bibim run cat.bibim");
}
