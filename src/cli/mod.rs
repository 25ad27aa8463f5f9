pub mod commands;
pub mod parser;

use crate::errors::{AppError, AppResult};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) -> AppResult<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| AppError::Config(format!("invalid RUST_LOG / log filter: {e}")))?;

    // a second init (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    Ok(())
}
