//! Agentscape: install AI agent and tool templates into your project.
//!
//! This is the main entry point for the `agentscape` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and maps
//! errors to exit codes.

mod catalog;
mod cli;
mod commands;
mod component;
mod config;
mod error;
mod exit_codes;
mod fs;
mod install;
mod logging;
mod project;
mod prompt;

#[cfg(test)]
mod test_support;

use cli::Cli;
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.global.verbose, cli.global.quiet);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            if err.is_cancellation() {
                eprintln!("{}", err.to_string().yellow());
            } else {
                eprintln!("{} {}", "Error:".red(), err);
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
