//! Settings synchronization
//!
//! This module owns the client-side settings tree: a section-keyed map of
//! arbitrary JSON values, fetched in bulk from the backend, patched with
//! optimistic local applies that commit or roll back on the server's
//! answer, and observable through a watch subscription. All mutation goes
//! through [`SettingsSynchronizer`]; readers never get a mutable handle.

mod export;
mod merge;
mod store;
mod synchronizer;
mod types;

pub use export::{BACKUP_KIND, RestoreReport, SettingsBackup};
pub use merge::deep_merge;
pub use synchronizer::SettingsSynchronizer;
pub use types::{SaveOutcome, SettingsSnapshot, SettingsTree, sections};
