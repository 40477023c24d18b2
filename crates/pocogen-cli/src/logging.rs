//! Diagnostic logging to stderr
//!
//! Stdout carries the generated class, so all log output goes to stderr.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flags
pub const LOG_ENV: &str = "POCOGEN_LOG";

/// Map the `-v` count to a default filter directive
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the global subscriber. Call once from `main`.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
