//! Configuration loading and validation tests

use std::collections::HashMap;
use std::io::Write;

use rolegate::config::RbacConfig;
use rolegate::{AccessControl, GrantTable, Profile, RbacError, Role, Subject};

fn write_temp(ext: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(ext)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_default_config_builds_default_table() {
    let config = RbacConfig::default();
    let access = AccessControl::from_config(&config).unwrap();

    let user = Subject::from(Profile::new(Role::User, true, "U1"));
    assert!(access.has_permission(&user, "quotes.create"));
}

#[test]
fn test_yaml_override_replaces_role_grants() {
    let file = write_temp(
        ".yaml",
        r#"
grants:
  guest:
    - dashboard.view
    - announcements.view
"#,
    );

    let config = RbacConfig::from_file(file.path()).unwrap();
    let access = AccessControl::from_config(&config).unwrap();

    let guest = Subject::from(Profile::new(Role::Guest, true, "U1"));
    assert!(access.has_permission(&guest, "announcements.view"));

    // Roles not named in the file keep their built-in grants
    let user = Subject::from(Profile::new(Role::User, true, "U1"));
    assert!(access.has_permission(&user, "projects.edit.own"));
}

#[test]
fn test_json_override_loads_by_extension() {
    let file = write_temp(".json", r#"{"grants": {"analyst": ["statistics.view"]}}"#);

    let config = RbacConfig::from_file(file.path()).unwrap();
    let access = AccessControl::from_config(&config).unwrap();

    let analyst = Subject::from(Profile::new(Role::Analyst, true, "U1"));
    assert!(access.has_permission(&analyst, "statistics.view"));
    assert!(!access.has_permission(&analyst, "statistics.export"));
}

#[test]
fn test_unknown_role_in_file_is_rejected() {
    let file = write_temp(
        ".yaml",
        r#"
grants:
  root:
    - "*"
"#,
    );

    let result = RbacConfig::from_file(file.path());
    assert!(matches!(result, Err(RbacError::Config(_))));
}

#[test]
fn test_missing_file_is_a_config_error() {
    let result = RbacConfig::from_file("/nonexistent/grants.yaml");
    assert!(matches!(result, Err(RbacError::Config(_))));
}

#[test]
fn test_stripping_superadmin_wildcard_is_rejected() {
    let config = RbacConfig {
        grants: HashMap::from([(Role::SuperAdmin, vec!["users.manage".to_string()])]),
    };

    let result = config.build_grant_table();
    assert!(matches!(result, Err(RbacError::Validation(_))));
}

#[test]
fn test_malformed_permission_is_rejected() {
    for bad in ["projects", "projects..own", "projects.edit.some", ""] {
        let config = RbacConfig {
            grants: HashMap::from([(Role::User, vec![bad.to_string()])]),
        };
        assert!(
            matches!(config.build_grant_table(), Err(RbacError::Validation(_))),
            "accepted malformed permission {:?}",
            bad
        );
    }
}

#[test]
fn test_incomplete_table_is_rejected() {
    let grants: HashMap<Role, Vec<String>> =
        HashMap::from([(Role::SuperAdmin, vec!["*".to_string()])]);

    let result = GrantTable::from_grants(grants);
    assert!(matches!(result, Err(RbacError::Validation(_))));
}

#[test]
fn test_from_env_without_variable_uses_builtin_grants() {
    // ROLEGATE_GRANTS_FILE is unset in the test environment
    let config = RbacConfig::from_env().unwrap();
    let access = AccessControl::from_config(&config).unwrap();

    let admin = Subject::from(Profile::new(Role::Admin, true, "U1"));
    assert!(access.has_permission(&admin, "settings.manage"));
}
