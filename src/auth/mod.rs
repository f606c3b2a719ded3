//! Authorization for the admin panel
//!
//! This module decides, client-side, what the acting user may do. It is
//! purely advisory: the backend re-checks everything, the resolver only
//! drives what the panel renders and enables.

pub mod rbac;

pub use rbac::{
    CascadeCatalog, CascadeRule, CascadeView, GroupedPermissions, PermissionGrant, Subject,
    can_perform, resolve_cascading_group, toggle_master, toggle_single,
};
