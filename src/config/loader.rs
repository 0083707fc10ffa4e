//! Configuration loading
//!
//! Grants files are YAML or JSON maps from role name to permission list:
//!
//! ```yaml
//! grants:
//!   analyst:
//!     - dashboard.view
//!     - statistics.view
//! ```

use std::env;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::RbacConfig;
use crate::utils::error::{RbacError, Result};

/// Environment variable naming the grants file to load
pub const GRANTS_FILE_ENV: &str = "ROLEGATE_GRANTS_FILE";

impl RbacConfig {
    /// Load configuration from a YAML or JSON file, by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading RBAC configuration from: {:?}", path);

        let content = fs::read_to_string(path)
            .map_err(|e| RbacError::Config(format!("Failed to read grants file: {}", e)))?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| RbacError::Config(format!("Failed to parse grants file: {}", e)))?,
            _ => serde_yaml::from_str(&content)
                .map_err(|e| RbacError::Config(format!("Failed to parse grants file: {}", e)))?,
        };

        Ok(config)
    }

    /// Load configuration from the environment
    ///
    /// Reads the file named by `ROLEGATE_GRANTS_FILE` when set; defaults to
    /// no overrides otherwise.
    pub fn from_env() -> Result<Self> {
        match env::var(GRANTS_FILE_ENV) {
            Ok(path) => Self::from_file(path),
            Err(_) => {
                debug!("{} not set, using built-in grants", GRANTS_FILE_ENV);
                Ok(Self::default())
            }
        }
    }
}
