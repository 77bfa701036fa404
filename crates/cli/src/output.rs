use std::fmt::Display;

use colored::Colorize;
use lunar_vm::ExecutionResult;

/// Renders the report of `result`, highlighting the error line of a failed run.
pub(crate) fn render_result(result: &ExecutionResult) -> String {
    result
        .to_string()
        .lines()
        .map(|line| {
            if line.starts_with("evm error:") {
                line.red().bold().to_string()
            } else if line.starts_with('-') {
                line.dimmed().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints the report of `result` to stdout.
pub(crate) fn print_result(result: &ExecutionResult) {
    println!("{}", render_result(result));
}

/// Renders an error that stopped a command before it ran.
pub(crate) fn render_error(error: &impl Display) -> String {
    format!("{} {error}", "error:".red().bold())
}

/// Prints `error` to stderr. Unlike log output, this is shown regardless of verbosity.
pub(crate) fn print_error(error: &impl Display) {
    eprintln!("{}", render_error(error));
}
