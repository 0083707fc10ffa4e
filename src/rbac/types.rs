//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{RbacError, Result};

/// Privilege role assigned to a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Unauthenticated or barely-provisioned account
    Guest,
    /// Regular account, owns its quotes/orders/projects
    User,
    /// Reporting and statistics access
    Analyst,
    /// Organization-wide content and record editing
    Editor,
    /// User oversight and moderation
    Moderator,
    /// Full business administration
    Admin,
    /// Unrestricted access
    SuperAdmin,
}

impl Role {
    /// Every role, in ascending privilege order
    pub const ALL: [Role; 7] = [
        Role::Guest,
        Role::User,
        Role::Analyst,
        Role::Editor,
        Role::Moderator,
        Role::Admin,
        Role::SuperAdmin,
    ];

    /// Stable lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Analyst => "analyst",
            Role::Editor => "editor",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
            Role::SuperAdmin => "superadmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "guest" => Ok(Role::Guest),
            "user" => Ok(Role::User),
            "analyst" => Ok(Role::Analyst),
            "editor" => Ok(Role::Editor),
            "moderator" => Ok(Role::Moderator),
            "admin" => Ok(Role::Admin),
            "superadmin" => Ok(Role::SuperAdmin),
            other => Err(RbacError::validation(format!("Unknown role: {}", other))),
        }
    }
}

/// Ownership scope of a permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Limited to resources the subject owns
    Own,
    /// Organization-wide
    All,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Own => "own",
            Scope::All => "all",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured form of a permission request, rendered to the flat
/// `"<resource>.<action>[.<scope>]"` string only at the grant-table boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRequest<'a> {
    /// Resource kind, e.g. `"projects"`
    pub resource: &'a str,
    /// Requested action, e.g. `"edit"`
    pub action: &'a str,
    /// Optional ownership scope
    pub scope: Option<Scope>,
}

impl<'a> ResourceRequest<'a> {
    pub fn new(resource: &'a str, action: &'a str, scope: Option<Scope>) -> Self {
        Self {
            resource,
            action,
            scope,
        }
    }

    /// Flat permission key as authored in the grant table
    pub fn permission_key(&self) -> String {
        match self.scope {
            Some(scope) => format!("{}.{}.{}", self.resource, self.action, scope),
            None => format!("{}.{}", self.resource, self.action),
        }
    }
}

impl fmt::Display for ResourceRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.permission_key())
    }
}

/// Resolved account profile of the actor requesting access
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Assigned role
    pub role: Role,
    /// Deactivated accounts keep their role but lose all access
    pub is_active: bool,
    /// Opaque identity, compared against resource owners
    pub identity: String,
}

impl Profile {
    pub fn new(role: Role, is_active: bool, identity: impl Into<String>) -> Self {
        Self {
            role,
            is_active,
            identity: identity.into(),
        }
    }
}

/// The actor being authorized
///
/// "No subject" is a first-class case rather than an optional profile, so
/// every check handles it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// No resolved profile (unauthenticated, or the profile fetch failed)
    Anonymous,
    /// Resolved profile
    Authenticated(Profile),
}

impl Subject {
    /// Active profile, if the subject has one
    ///
    /// Inactive profiles resolve to `None`: a deactivated account is treated
    /// like no subject at all by every check.
    pub fn active_profile(&self) -> Option<&Profile> {
        match self {
            Subject::Anonymous => None,
            Subject::Authenticated(profile) => profile.is_active.then_some(profile),
        }
    }
}

impl From<Profile> for Subject {
    fn from(profile: Profile) -> Self {
        Subject::Authenticated(profile)
    }
}
