//! Ownership resolution
//!
//! Combines role-level grants with per-instance ownership. Three distinct
//! rule sets live here and must stay separate: generic resources, user-entity
//! edit, and user-entity delete each break ties differently. Self-edit is
//! always allowed, self-delete always forbidden, and admins bypass ownership
//! for delete but not for edit.

use super::evaluator::AccessControl;
use super::types::{Role, Scope, Subject};

impl AccessControl {
    /// May the subject edit the resource instance owned by `owner_identity`?
    ///
    /// An organization-wide edit grant wins outright; otherwise an own-scoped
    /// grant applies only when the subject is the owner.
    pub fn can_edit_resource(
        &self,
        subject: &Subject,
        resource: &str,
        owner_identity: &str,
    ) -> bool {
        if self.can_access_resource(subject, resource, "edit", Some(Scope::All)) {
            return true;
        }

        if self.can_access_resource(subject, resource, "edit", Some(Scope::Own)) {
            return subject
                .active_profile()
                .is_some_and(|profile| profile.identity == owner_identity);
        }

        false
    }

    /// May the subject delete the resource instance owned by `owner_identity`?
    ///
    /// Admins and superadmins may delete anything. Owners may always delete
    /// their own resource, with no delete-scope grant required; deliberately
    /// more permissive than the edit rule.
    pub fn can_delete_resource(
        &self,
        subject: &Subject,
        _resource: &str,
        owner_identity: &str,
    ) -> bool {
        let Some(profile) = subject.active_profile() else {
            return false;
        };

        if matches!(profile.role, Role::Admin | Role::SuperAdmin) {
            return true;
        }

        profile.identity == owner_identity
    }

    /// May the subject edit the user account `target_identity`?
    ///
    /// Self-edit is always allowed, regardless of role; editing anyone else
    /// requires the user-management grant.
    pub fn can_edit_user(&self, subject: &Subject, target_identity: &str) -> bool {
        let Some(profile) = subject.active_profile() else {
            return false;
        };

        if profile.identity == target_identity {
            return true;
        }

        self.has_permission(subject, "users.manage")
    }

    /// May the subject delete the user account `target_identity`?
    ///
    /// Self-deletion is forbidden for every role, superadmin included; user
    /// deletion is not generic resource deletion and never falls back to the
    /// owner-wins rule.
    pub fn can_delete_user(&self, subject: &Subject, target_identity: &str) -> bool {
        let Some(profile) = subject.active_profile() else {
            return false;
        };

        if profile.identity == target_identity {
            return false;
        }

        matches!(profile.role, Role::Admin | Role::SuperAdmin)
    }
}
