//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::PinfallError;

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used, e.g.
/// `"info"` or `"pinfall_turn=debug,info"`. Fails if a global subscriber
/// is already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), PinfallError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| PinfallError::Telemetry(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| PinfallError::Telemetry(e.to_string()))?;

    tracing::debug!(default_filter, "tracing initialised");
    Ok(())
}
