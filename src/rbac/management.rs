//! Role management guard
//!
//! Role changes are a fixed two-tier privilege: only superadmin and admin may
//! ever assign roles. This is independent of hierarchy distance and is not
//! the same relation as [`Role::is_higher_than`].

use super::types::Role;

/// May a subject holding `current_role` assign `target_role` to someone?
///
/// Superadmin may assign any role. Admin may assign any role strictly below
/// admin. Nobody else may change roles at all.
pub fn can_manage_role(current_role: Role, target_role: Role) -> bool {
    match current_role {
        Role::SuperAdmin => true,
        Role::Admin => Role::Admin.is_higher_than(target_role),
        _ => false,
    }
}

/// Roles a subject holding `current_role` may assign, in ascending order
///
/// Drives role-picker population in admin screens.
pub fn assignable_roles(current_role: Role) -> Vec<Role> {
    Role::ALL
        .iter()
        .copied()
        .filter(|target| can_manage_role(current_role, *target))
        .collect()
}
