//! Structured logging setup for the binary
//!
//! Library code only emits `tracing` events; the subscriber is installed once
//! by the CLI. Output always goes to stderr so stdout stays clean for results.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive, e.g. `logseq_sidekick=trace`
pub const LOG_ENV: &str = "LOGSEQ_SIDEKICK_LOG";

/// Resolve the filter directive from CLI arguments
pub fn level_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("logseq_sidekick={}", level),
        (true, None) => "logseq_sidekick=debug".to_string(),
        (false, None) => "logseq_sidekick=warn".to_string(),
    }
}

/// Install the global subscriber. `$LOGSEQ_SIDEKICK_LOG` overrides the CLI level.
pub fn init_tracing(verbose: bool, log_level: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbose, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer().compact().with_target(false).with_writer(std::io::stderr).with_ansi(false),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
