//! Cascading group resolution and toggles
//!
//! A cascading group has one master permission that gates the rest. The
//! toggle semantics are deliberately asymmetric: revoking the master also
//! revokes every child, but granting the master grants nothing else; each
//! child has to be enabled explicitly afterwards.

use std::collections::HashSet;

use super::subject::can_perform;
use super::types::{CascadeRule, CascadeView, PermissionGrant};

/// Compute the effective view of a cascading group.
///
/// `master_on` follows [`can_perform`], so admins always see the group as
/// enabled. `visible_children` is the group minus the master record itself;
/// the caller treats them as inert while `master_on` is false. Inputs are
/// never mutated.
pub fn resolve_cascading_group(
    role: &str,
    granted: &HashSet<String>,
    rule: &CascadeRule,
    group: &[PermissionGrant],
) -> CascadeView {
    let master_on = can_perform(role, granted, &rule.master_permission);
    let visible_children = group
        .iter()
        .filter(|p| p.name != rule.master_permission)
        .cloned()
        .collect();

    CascadeView {
        master_on,
        visible_children,
    }
}

/// Toggle a group's master permission.
///
/// If the master is currently granted, the result drops the master and all
/// of `children`. If it is absent, the result adds the master only.
pub fn toggle_master(
    granted: &HashSet<String>,
    master: &str,
    children: &[String],
) -> HashSet<String> {
    let mut next = granted.clone();
    if next.contains(master) {
        next.remove(master);
        for child in children {
            next.remove(child);
        }
    } else {
        next.insert(master.to_string());
    }
    next
}

/// Toggle a single permission with no cascading
pub fn toggle_single(granted: &HashSet<String>, permission: &str) -> HashSet<String> {
    let mut next = granted.clone();
    if !next.remove(permission) {
        next.insert(permission.to_string());
    }
    next
}
