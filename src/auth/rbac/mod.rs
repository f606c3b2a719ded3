//! Role and permission resolution
//!
//! Pure, synchronous capability checks over a role tag and a flat set of
//! granted permission names, including the cascading master/child group
//! model. Nothing in this module performs I/O or can fail: unknown or
//! absent permission names simply resolve to "not granted".

mod cascade;
mod subject;
mod types;

pub use cascade::{resolve_cascading_group, toggle_master, toggle_single};
pub use subject::{ADMIN_ROLE, Subject, can_perform, is_admin_role};
pub use types::{CascadeCatalog, CascadeRule, CascadeView, GroupedPermissions, PermissionGrant};
