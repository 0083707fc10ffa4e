//! End-to-end access decision tests
//!
//! Exercises the checks the way server-side mutation guards call them: a
//! resolved profile (or none) in, a plain boolean out.

use rolegate::{
    AccessControl, Profile, Role, Scope, Subject, assignable_roles, can_manage_role,
};

fn active(role: Role, identity: &str) -> Subject {
    Subject::from(Profile::new(role, true, identity))
}

#[test]
fn test_failed_profile_fetch_means_no_access() {
    let access = AccessControl::default();

    // Callers map "profile not found" to Anonymous; everything denies
    assert!(!access.has_permission(&Subject::Anonymous, "dashboard.view"));
    assert!(!access.can_edit_resource(&Subject::Anonymous, "projects", "U1"));
    assert!(!access.can_edit_user(&Subject::Anonymous, "U1"));
    assert!(!access.can_delete_user(&Subject::Anonymous, "U1"));
    assert!(!access.can_manage_users(&Subject::Anonymous));
}

#[test]
fn test_quote_editing_matrix() {
    let access = AccessControl::default();

    // user: own-scoped viewing only, no edit grant for quotes at all
    let owner = active(Role::User, "U1");
    assert!(!access.can_edit_resource(&owner, "quotes", "U1"));

    // editor: organization-wide edit
    let editor = active(Role::Editor, "E1");
    assert!(access.can_edit_resource(&editor, "quotes", "U1"));

    // analyst: reporting role, no record editing
    let analyst = active(Role::Analyst, "A1");
    assert!(!access.can_edit_resource(&analyst, "quotes", "A1"));
}

#[test]
fn test_project_lifecycle_for_a_regular_user() {
    let access = AccessControl::default();
    let user = active(Role::User, "U1");

    assert!(access.can_access_resource(&user, "projects", "create", None));
    assert!(access.can_access_resource(&user, "projects", "view", Some(Scope::Own)));
    assert!(access.can_edit_resource(&user, "projects", "U1"));
    assert!(!access.can_edit_resource(&user, "projects", "U2"));
    assert!(access.can_delete_resource(&user, "projects", "U1"));
    assert!(!access.can_delete_resource(&user, "projects", "U2"));
}

#[test]
fn test_account_administration_rules() {
    let access = AccessControl::default();
    let admin = active(Role::Admin, "A1");
    let root = active(Role::SuperAdmin, "S1");

    // Admins manage other accounts but never delete their own
    assert!(access.can_edit_user(&admin, "U1"));
    assert!(access.can_delete_user(&admin, "U1"));
    assert!(!access.can_delete_user(&admin, "A1"));
    assert!(!access.can_delete_user(&root, "S1"));

    // Everyone edits their own account, nobody below admin edits others
    let guest = active(Role::Guest, "G1");
    assert!(access.can_edit_user(&guest, "G1"));
    assert!(!access.can_edit_user(&guest, "U1"));
}

#[test]
fn test_role_escalation_is_blocked() {
    // Admin cannot mint another admin, let alone a superadmin
    assert!(!can_manage_role(Role::Admin, Role::Admin));
    assert!(!can_manage_role(Role::Admin, Role::SuperAdmin));
    assert!(can_manage_role(Role::Admin, Role::Moderator));

    // Moderator outranks user but still cannot assign roles
    assert!(Role::Moderator.is_higher_than(Role::User));
    assert!(!can_manage_role(Role::Moderator, Role::User));

    assert!(can_manage_role(Role::SuperAdmin, Role::SuperAdmin));
}

#[test]
fn test_role_picker_population() {
    assert_eq!(assignable_roles(Role::Admin).len(), 5);
    assert_eq!(assignable_roles(Role::SuperAdmin).len(), 7);
    assert!(assignable_roles(Role::Editor).is_empty());
}

#[test]
fn test_deactivated_admin_loses_everything_but_keeps_role() {
    let access = AccessControl::default();
    let suspended = Subject::from(Profile::new(Role::Admin, false, "A1"));

    assert!(!access.can_manage_users(&suspended));
    assert!(!access.can_delete_resource(&suspended, "orders", "U1"));
    assert!(!access.can_edit_user(&suspended, "A1"));

    if let Subject::Authenticated(profile) = &suspended {
        assert_eq!(profile.role, Role::Admin);
    }
}

#[test]
fn test_grant_lists_keep_authored_order() {
    let access = AccessControl::default();
    let grants = access.permissions_for(Role::User);

    // Display order is the authored order, not sorted
    assert_eq!(grants.first().map(String::as_str), Some("dashboard.view"));
    assert!(grants.contains(&"projects.edit.own".to_string()));
}
