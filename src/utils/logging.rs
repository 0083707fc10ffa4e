//! Logging setup
//!
//! Thin wrapper over `tracing-subscriber` so embedding applications and
//! tests get consistent output. Honors `RUST_LOG` when set.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use super::error::{RbacError, Result};

/// Initialize the global tracing subscriber
///
/// `level` is the default when `RUST_LOG` is not set. Fails if a global
/// subscriber is already installed.
pub fn init_logging(level: Option<Level>) -> Result<()> {
    let default_level = level.unwrap_or(Level::INFO);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| RbacError::config(format!("Failed to initialize logging: {}", e)))
}
