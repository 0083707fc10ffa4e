//! RBAC configuration
//!
//! The grant table and the role hierarchy are the only configuration this
//! crate has. Both are fixed at initialization: the hierarchy is compiled in,
//! and the grant table is the built-in one unless a deployment overrides
//! individual roles from a grants file. No runtime reload.

pub mod loader;
pub mod validation;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::rbac::{DEFAULT_GRANTS, GrantTable, Role};
use crate::utils::error::Result;

/// RBAC configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Per-role grant overrides; roles not listed keep their built-in grants
    #[serde(default)]
    pub grants: HashMap<Role, Vec<String>>,
}

impl RbacConfig {
    /// Build the effective grant table: built-in grants plus overrides
    ///
    /// The merged table is validated as a whole, so an override that strips
    /// the superadmin wildcard or authors a malformed permission is rejected
    /// here rather than surfacing as a surprising deny later.
    pub fn build_grant_table(&self) -> Result<GrantTable> {
        let mut grants = DEFAULT_GRANTS.clone();
        for (role, list) in &self.grants {
            debug!("Overriding grants for role {}", role);
            grants.insert(*role, list.clone());
        }
        GrantTable::from_grants(grants)
    }
}
