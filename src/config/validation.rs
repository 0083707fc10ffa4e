//! Grant table validation
//!
//! A malformed table is a deployment defect and is rejected at load time;
//! evaluation never reports configuration problems.

use std::collections::HashMap;
use tracing::debug;

use crate::rbac::{Role, WILDCARD};
use crate::utils::error::{RbacError, Result};

/// Validate an authored grant table
///
/// Rejects the table when any role lacks an entry, when superadmin does not
/// hold the wildcard, or when any permission string is not a dot-delimited
/// `resource.action` or `resource.action.scope` key.
pub fn validate_grants(grants: &HashMap<Role, Vec<String>>) -> Result<()> {
    for role in Role::ALL {
        let Some(list) = grants.get(&role) else {
            return Err(RbacError::validation(format!(
                "Grant table has no entry for role: {}",
                role
            )));
        };

        for permission in list {
            validate_permission(role, permission)?;
        }

        if role == Role::SuperAdmin && !list.iter().any(|p| p == WILDCARD) {
            return Err(RbacError::validation(
                "superadmin grants must include the wildcard",
            ));
        }
    }

    debug!("Grant table validated");
    Ok(())
}

fn validate_permission(role: Role, permission: &str) -> Result<()> {
    if permission == WILDCARD {
        return Ok(());
    }

    let segments: Vec<&str> = permission.split('.').collect();
    let well_formed = match segments.as_slice() {
        [resource, action] => !resource.is_empty() && !action.is_empty(),
        [resource, action, scope] => {
            !resource.is_empty() && !action.is_empty() && matches!(*scope, "own" | "all")
        }
        _ => false,
    };

    if !well_formed {
        return Err(RbacError::validation(format!(
            "Malformed permission {:?} for role {}",
            permission, role
        )));
    }

    Ok(())
}
