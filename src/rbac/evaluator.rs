//! Permission evaluator
//!
//! Pure, synchronous access checks. Deny is a plain `false`, never an error:
//! callers render a fallback or reject a mutation on `false`.

use tracing::info;

use super::grants::GrantTable;
use super::types::{ResourceRequest, Role, Scope, Subject};
use crate::config::RbacConfig;
use crate::utils::error::Result;

/// Read-only access-control evaluator
///
/// Holds the grant table and nothing else. Construction validates the table
/// and is the only fallible step; every check afterwards is a pure function
/// of its arguments, safe to call from any number of threads.
#[derive(Debug, Clone)]
pub struct AccessControl {
    grants: GrantTable,
}

impl AccessControl {
    /// Evaluator over an explicit grant table
    pub fn new(grants: GrantTable) -> Self {
        Self { grants }
    }

    /// Evaluator from configuration (built-in table plus any overrides)
    pub fn from_config(config: &RbacConfig) -> Result<Self> {
        let grants = config.build_grant_table()?;
        info!("Access control initialized");
        Ok(Self::new(grants))
    }

    /// The grant table in use
    pub fn grants(&self) -> &GrantTable {
        &self.grants
    }

    /// Authored permission list for a role, in display order
    pub fn permissions_for(&self, role: Role) -> &[String] {
        self.grants.permissions_for(role)
    }

    /// Does the subject hold `permission`?
    ///
    /// Anonymous and inactive subjects are denied unconditionally, even for
    /// grants every role nominally has. The wildcard grant short-circuits.
    pub fn has_permission(&self, subject: &Subject, permission: &str) -> bool {
        let Some(profile) = subject.active_profile() else {
            return false;
        };

        if self.grants.has_wildcard(profile.role) {
            return true;
        }

        self.grants.contains(profile.role, permission)
    }

    /// Does the subject hold at least one of `permissions`?
    ///
    /// Empty input is `false`: nothing asked for, nothing granted.
    pub fn has_any_permission(&self, subject: &Subject, permissions: &[&str]) -> bool {
        permissions
            .iter()
            .any(|permission| self.has_permission(subject, permission))
    }

    /// Does the subject hold every one of `permissions`?
    ///
    /// Empty input is vacuously `true`.
    pub fn has_all_permissions(&self, subject: &Subject, permissions: &[&str]) -> bool {
        permissions
            .iter()
            .all(|permission| self.has_permission(subject, permission))
    }

    /// Does the subject satisfy a structured permission request?
    ///
    /// Renders the flat permission key and delegates to [`has_permission`];
    /// the grant table itself is authored as flat strings.
    ///
    /// [`has_permission`]: AccessControl::has_permission
    pub fn can_access(&self, subject: &Subject, request: &ResourceRequest<'_>) -> bool {
        self.has_permission(subject, &request.permission_key())
    }

    /// May the subject perform `action` on `resource`, optionally scoped?
    ///
    /// Every resource-specific guard goes through this composition; none
    /// special-case.
    pub fn can_access_resource(
        &self,
        subject: &Subject,
        resource: &str,
        action: &str,
        scope: Option<Scope>,
    ) -> bool {
        self.can_access(subject, &ResourceRequest::new(resource, action, scope))
    }
}

impl Default for AccessControl {
    /// Evaluator over the built-in grant table
    fn default() -> Self {
        Self::new(GrantTable::default())
    }
}
