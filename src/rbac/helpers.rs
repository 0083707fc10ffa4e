//! Convenience guards for common back-office checks
//!
//! Thin wrappers over [`AccessControl::can_access_resource`]; no guard here
//! carries its own logic.

use super::evaluator::AccessControl;
use super::types::Subject;

impl AccessControl {
    /// User administration screens
    pub fn can_manage_users(&self, subject: &Subject) -> bool {
        self.can_access_resource(subject, "users", "manage", None)
    }

    /// Audit log viewer
    pub fn can_view_audit_logs(&self, subject: &Subject) -> bool {
        self.can_access_resource(subject, "audit", "view", None)
    }

    /// Statistics and KPI reporting
    pub fn can_view_statistics(&self, subject: &Subject) -> bool {
        self.can_access_resource(subject, "statistics", "view", None)
    }

    /// Application settings panels
    pub fn can_manage_settings(&self, subject: &Subject) -> bool {
        self.can_access_resource(subject, "settings", "manage", None)
    }
}
