//! Subject normalization and permission checking

use std::collections::HashSet;

use super::cascade::resolve_cascading_group;
use super::types::{CascadeRule, CascadeView, GroupedPermissions, PermissionGrant};

/// Role that bypasses all granular permission checks
pub const ADMIN_ROLE: &str = "admin";

/// Whether a role tag is the admin super-grant (case-insensitive)
pub fn is_admin_role(role: &str) -> bool {
    role.eq_ignore_ascii_case(ADMIN_ROLE)
}

/// Check whether a subject with `role` and `granted` names may perform
/// `permission`.
///
/// Admins pass unconditionally; everyone else needs exact set membership.
/// Unknown names resolve to "not granted", never to an error.
pub fn can_perform(role: &str, granted: &HashSet<String>, permission: &str) -> bool {
    is_admin_role(role) || granted.contains(permission)
}

/// The acting subject: a role tag plus the flat set of granted names.
///
/// Built once at the boundary from the backend's grouped matrix; call sites
/// never re-derive the flat set themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    role: String,
    granted: HashSet<String>,
}

impl Subject {
    /// Create a subject from an already-flat granted set
    pub fn new(role: impl Into<String>, granted: HashSet<String>) -> Self {
        Self {
            role: role.into(),
            granted,
        }
    }

    /// Normalize the backend's grouped permission matrix into a subject.
    ///
    /// Flattens every group and keeps the names marked as assigned.
    pub fn from_grouped(role: impl Into<String>, grouped: &GroupedPermissions) -> Self {
        let granted = grouped
            .values()
            .flatten()
            .filter(|p| p.assigned)
            .map(|p| p.name.clone())
            .collect();
        Self::new(role, granted)
    }

    /// The subject's role tag
    pub fn role(&self) -> &str {
        &self.role
    }

    /// The flat granted-name set
    pub fn granted(&self) -> &HashSet<String> {
        &self.granted
    }

    /// Whether the subject holds the admin super-grant
    pub fn is_admin(&self) -> bool {
        is_admin_role(&self.role)
    }

    /// Whether the subject may perform a named action
    pub fn can(&self, permission: &str) -> bool {
        can_perform(&self.role, &self.granted, permission)
    }

    /// Effective view of a cascading group for this subject
    pub fn resolve_group(&self, rule: &CascadeRule, group: &[PermissionGrant]) -> CascadeView {
        resolve_cascading_group(&self.role, &self.granted, rule, group)
    }

    /// Replace the granted set, e.g. after a toggle round-trips through the
    /// backend
    pub fn set_granted(&mut self, granted: HashSet<String>) {
        self.granted = granted;
    }
}
