// file: src/logging/logger.rs
// version: 1.0.0
// guid: f3034a87-3b32-4204-823b-d881b8e882ee

//! Logger initialization

use crate::error::{ConfigureError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the filter for the requested verbosity.
///
/// `RUST_LOG` wins when neither flag is given.
fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize the logging system.
///
/// Log records go to stderr so captured command output on stdout stays clean.
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| ConfigureError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}
