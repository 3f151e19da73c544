// src/logging.rs
// =============================================================================
// Sets up the tracing subscriber.
//
// - RUST_LOG wins when it is set, otherwise --verbosity is used
// - Logs go to stderr so they never mix with the report on stdout
// - With --log-file the log is appended to that file instead
// =============================================================================

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

pub fn init_logging(level: LogLevel, log_file: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,link_extractor={}", level.as_str())));

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
            tracing::debug!("logging to {}", path.display());
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}
