//! Log output for the command line
//!
//! Everything is written to stderr so `wirekey print` output stays clean.
//! `RUST_LOG` takes precedence over the configured level and the `-v`/`-q`
//! flags.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Level after applying `-v`/`-q` to the configured level
pub fn effective_level(configured: &str, verbose: u8, quiet: bool) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber; later calls are ignored
pub fn init(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
#[path = "logging/logging_tests.rs"]
mod logging_tests;
