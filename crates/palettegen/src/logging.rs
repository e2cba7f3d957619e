//! Subscriber setup for the binary.
//!
//! Library crates only emit `tracing` events; this module decides where they
//! go. Output is written to stderr so it never mixes with generated text on
//! stdout. `RUST_LOG` takes precedence over the command-line verbosity.

use tracing_subscriber::EnvFilter;

/// Maps `-v` count and `-q` to a filter directive.
pub fn level_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global fmt subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
