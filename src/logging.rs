//! Logging setup for the application.
//!
//! Installs a global `tracing` subscriber writing to stdout. The filter comes
//! from `RUST_LOG` and defaults to `info`.

use std::sync::OnceLock;

use tracing_subscriber::{
    fmt,
    prelude::*,
    EnvFilter,
    Registry,
};

use crate::core::AgriError;

const DEFAULT_FILTER: &str = "info";

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Subsequent calls are no-ops.
pub fn init() -> Result<(), AgriError> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let subscriber = Registry::default()
        .with(build_env_filter())
        .with(fmt::layer().with_target(false).with_writer(std::io::stdout));
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AgriError::Logging(e.to_string()))?;
    let _ = INITIALIZED.set(());

    tracing::debug!("Logging initialized");
    Ok(())
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
