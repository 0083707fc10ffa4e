//! Role hierarchy table
//!
//! Total ordering of roles by privilege. Analyst and editor sit on the same
//! level: their duties differ but neither outranks the other.

use super::types::Role;

impl Role {
    /// Privilege level, monotonically increasing from guest to superadmin
    pub fn hierarchy_level(&self) -> u8 {
        match self {
            Role::Guest => 0,
            Role::User => 1,
            Role::Analyst => 2,
            Role::Editor => 2,
            Role::Moderator => 3,
            Role::Admin => 4,
            Role::SuperAdmin => 5,
        }
    }

    /// Strictly higher privilege than `other`
    pub fn is_higher_than(&self, other: Role) -> bool {
        self.hierarchy_level() > other.hierarchy_level()
    }
}
