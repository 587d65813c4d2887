//! Logger bootstrap

use crate::error::{NtzError, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;

/// Start logging to stderr with the given spec (e.g. `warn`, `ntz=debug`).
///
/// The returned handle must be kept alive for the rest of the process.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_str(level)
        .map_err(|e| NtzError::Config(format!("Invalid log level '{}': {}", level, e)))?
        .log_to_stderr()
        .start()
        .map_err(|e| NtzError::Config(format!("Failed to start logger: {}", e)))?;

    debug!(
        "event=app_start version={} level={}",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(handle)
}
