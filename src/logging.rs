//! Diagnostic logging to stderr.
//!
//! User-facing output goes to stdout through the commands; tracing events
//! are diagnostics and are silent unless `-v` is given.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given verbosity flags.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::new(format!("agentscape={}", level_for(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
