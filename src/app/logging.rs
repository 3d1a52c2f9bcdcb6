//! Subscriber setup for hook runs.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::domain::AppError;

/// Filter directives, e.g. `ONDEMAND_HOOKS_LOG=debug`.
pub const LOG_ENV: &str = "ONDEMAND_HOOKS_LOG";

/// Append plain-text records to `log_file` and mirror them on stderr.
pub fn init(log_file: &Path) -> Result<(), AppError> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| AppError::config_error(format!("Failed to initialize logging: {}", e)))
}
