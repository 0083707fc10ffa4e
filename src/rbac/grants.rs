//! Role-permission grant table
//!
//! Each role's grant list is authored independently. Higher roles happen to
//! hold supersets of lower ones in places, but nothing is inherited or
//! derived from hierarchy level: analyst and editor share a level and hold
//! disjoint grants. Deriving grants from the hierarchy would silently change
//! behavior.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::types::Role;
use crate::config::validation::validate_grants;
use crate::utils::error::Result;

/// Wildcard grant meaning unconditional access
pub const WILDCARD: &str = "*";

/// Built-in grants for one role, in display order
fn default_grants_for(role: Role) -> &'static [&'static str] {
    match role {
        Role::Guest => &["dashboard.view"],
        Role::User => &[
            "dashboard.view",
            "quotes.view.own",
            "quotes.create",
            "orders.view.own",
            "orders.create",
            "projects.view.own",
            "projects.create",
            "projects.edit.own",
        ],
        Role::Analyst => &[
            "dashboard.view",
            "statistics.view",
            "statistics.export",
            "reports.view",
            "reports.create",
            "costs.view",
        ],
        Role::Editor => &[
            "dashboard.view",
            "quotes.view.all",
            "quotes.edit.all",
            "orders.view.all",
            "orders.edit.all",
            "projects.view.all",
            "projects.edit.all",
        ],
        Role::Moderator => &[
            "dashboard.view",
            "users.view",
            "quotes.view.all",
            "orders.view.all",
            "projects.view.all",
            "projects.edit.all",
            "audit.view",
        ],
        Role::Admin => &[
            "dashboard.view",
            "users.view",
            "users.manage",
            "quotes.view.all",
            "quotes.edit.all",
            "quotes.delete",
            "orders.view.all",
            "orders.edit.all",
            "orders.delete",
            "projects.view.all",
            "projects.edit.all",
            "projects.delete",
            "statistics.view",
            "statistics.export",
            "reports.view",
            "reports.create",
            "costs.view",
            "costs.manage",
            "audit.view",
            "settings.manage",
        ],
        Role::SuperAdmin => &[WILDCARD],
    }
}

/// Built-in grant table, covering every role
pub static DEFAULT_GRANTS: Lazy<HashMap<Role, Vec<String>>> = Lazy::new(|| {
    Role::ALL
        .iter()
        .map(|role| {
            let grants = default_grants_for(*role)
                .iter()
                .map(|s| s.to_string())
                .collect();
            (*role, grants)
        })
        .collect()
});

/// Immutable role-to-permissions mapping
///
/// Keeps the authored list for display and a set per role for checks.
#[derive(Debug, Clone)]
pub struct GrantTable {
    /// Authored grant lists, order preserved
    grants: HashMap<Role, Vec<String>>,
    /// Lookup sets derived from `grants`
    lookup: HashMap<Role, HashSet<String>>,
}

impl GrantTable {
    /// Build a table from authored grant lists, rejecting malformed tables
    pub fn from_grants(grants: HashMap<Role, Vec<String>>) -> Result<Self> {
        validate_grants(&grants)?;

        let lookup = grants
            .iter()
            .map(|(role, list)| (*role, list.iter().cloned().collect()))
            .collect();

        debug!("Built grant table for {} roles", grants.len());
        Ok(Self { grants, lookup })
    }

    /// Authored grant list for a role, in display order
    ///
    /// A validated table is total over `Role`; a missing entry yields the
    /// empty list rather than a panic.
    pub fn permissions_for(&self, role: Role) -> &[String] {
        self.grants.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `role` holds the wildcard grant
    pub fn has_wildcard(&self, role: Role) -> bool {
        self.lookup
            .get(&role)
            .is_some_and(|set| set.contains(WILDCARD))
    }

    /// Whether `role` holds `permission` (exact, case-sensitive match)
    pub fn contains(&self, role: Role, permission: &str) -> bool {
        self.lookup
            .get(&role)
            .is_some_and(|set| set.contains(permission))
    }
}

impl Default for GrantTable {
    fn default() -> Self {
        // The built-in table is valid by construction
        Self::from_grants(DEFAULT_GRANTS.clone())
            .unwrap_or_else(|e| unreachable!("built-in grant table is valid: {}", e))
    }
}
