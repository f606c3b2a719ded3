//! # fleetadmin-rs
//!
//! Client-side core of a fleet administration panel. Two cooperating
//! components over an opaque REST backend:
//!
//! - **Permission resolution** ([`auth`]): pure, synchronous answers to
//!   "may this user perform action X", with a case-insensitive admin
//!   super-grant and cascading master/child permission groups.
//! - **Settings synchronization** ([`settings`]): one owned, observable
//!   tree of section-keyed settings, patched optimistically and committed
//!   or rolled back on the server's answer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fleetadmin_rs::{AdminApi, ClientConfig, SettingsSynchronizer, Subject};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::builder("https://api.example.com/admin")
//!         .user_id("42")
//!         .build()?;
//!     let api = AdminApi::new(&config)?;
//!
//!     // Who may do what
//!     let subject = Subject::from_grouped("operador", &api.fetch_permissions().await?);
//!     if subject.can("crear_ciudades") {
//!         // render the "create city" button
//!     }
//!
//!     // Optimistic settings patch: the tree shows the new value
//!     // immediately, and snaps back if the backend rejects it
//!     let settings = SettingsSynchronizer::new(api);
//!     settings.load().await?;
//!     settings.save_section("apariencia", json!({"mode": "dark"})).await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod auth;
pub mod config;
pub mod sdk;
pub mod settings;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    ADMIN_ROLE, CascadeCatalog, CascadeRule, CascadeView, GroupedPermissions, PermissionGrant,
    Subject, can_perform, resolve_cascading_group, toggle_master, toggle_single,
};
pub use config::ClientConfig;
pub use sdk::{AdminApi, PatchResponse, init};
pub use settings::{
    BACKUP_KIND, RestoreReport, SaveOutcome, SettingsBackup, SettingsSnapshot,
    SettingsSynchronizer, SettingsTree, deep_merge, sections,
};
pub use utils::error::{AdminError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
