//! # rolegate
//!
//! Role-based access control core for a logistics brokerage back office.
//! The crate answers one question in several shapes: may this subject do
//! that? Roles, grant tables, ownership rules, and role-management guards
//! live here; fetching profiles and persisting anything is the caller's job.
//!
//! ## Quick Start
//!
//! ```rust
//! use rolegate::{AccessControl, Profile, Role, Scope, Subject};
//!
//! let access = AccessControl::default();
//! let subject = Subject::from(Profile::new(Role::User, true, "U1"));
//!
//! assert!(access.has_permission(&subject, "quotes.create"));
//! assert!(access.can_access_resource(&subject, "projects", "edit", Some(Scope::Own)));
//! assert!(!access.can_manage_users(&subject));
//! assert!(access.can_edit_resource(&subject, "projects", "U1"));
//! assert!(!access.can_edit_resource(&subject, "projects", "U2"));
//! ```
//!
//! ## Custom grant tables
//!
//! ```rust,no_run
//! use rolegate::{AccessControl, config::RbacConfig};
//!
//! fn main() -> rolegate::Result<()> {
//!     let config = RbacConfig::from_file("config/grants.yaml")?;
//!     let access = AccessControl::from_config(&config)?;
//!     # let _ = access;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod config;
pub mod rbac;
pub mod utils;

// Re-export main types
pub use config::RbacConfig;
pub use rbac::{
    AccessControl, GrantTable, Profile, ResourceRequest, Role, Scope, Subject, WILDCARD,
    assignable_roles, can_manage_role,
};
pub use utils::error::{RbacError, Result};
pub use utils::logging::init_logging;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
