//! Role-Based Access Control (RBAC) core
//!
//! This module provides the authorization checks consumed by route guards
//! and server-side mutation handlers.

mod evaluator;
mod grants;
mod helpers;
mod hierarchy;
mod management;
mod ownership;
mod types;

// Re-export public types and functions
pub use evaluator::AccessControl;
pub use grants::{DEFAULT_GRANTS, GrantTable, WILDCARD};
pub use management::{assignable_roles, can_manage_role};
pub use types::{Profile, ResourceRequest, Role, Scope, Subject};
