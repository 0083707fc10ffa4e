//! Shared utilities
//!
//! Error types and logging setup used across the crate.

pub mod error;
pub mod logging;

// Re-export commonly used types and functions
pub use error::{RbacError, Result};
pub use logging::init_logging;
