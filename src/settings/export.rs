//! Settings backup export and restore
//!
//! A leaf path: the panel lets an operator download the current tree as a
//! JSON envelope and re-apply one later. Import is parse-then-best-effort:
//! each section goes through the normal save path and failures are
//! reported, not fatal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use super::synchronizer::SettingsSynchronizer;
use super::types::SettingsTree;
use crate::utils::error::{AdminError, Result};

/// Envelope type tag
pub const BACKUP_KIND: &str = "settings";

/// The downloaded-backup envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsBackup {
    /// Always [`BACKUP_KIND`]
    #[serde(rename = "type")]
    pub kind: String,
    /// When the backup was taken
    #[serde(rename = "exportedAt")]
    pub exported_at: DateTime<Utc>,
    /// The exported tree
    pub settings: SettingsTree,
}

impl SettingsBackup {
    /// Wrap a tree in a fresh envelope
    pub fn new(settings: SettingsTree) -> Self {
        Self {
            kind: BACKUP_KIND.to_string(),
            exported_at: Utc::now(),
            settings,
        }
    }

    /// Serialize to the download format
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an envelope, rejecting payloads of a different type
    pub fn from_json(json: &str) -> Result<Self> {
        let backup: Self = serde_json::from_str(json)?;
        if backup.kind != BACKUP_KIND {
            return Err(AdminError::Backup(format!(
                "Not a settings backup: type {}",
                backup.kind
            )));
        }
        Ok(backup)
    }

    /// Write the envelope to a file
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read an envelope from a file
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

/// Result of a best-effort restore
#[derive(Debug, Clone, Default)]
pub struct RestoreReport {
    /// Sections that were saved successfully
    pub applied: Vec<String>,
    /// Sections that failed, with the backend message
    pub failed: Vec<(String, String)>,
}

impl RestoreReport {
    /// Whether every section applied
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl SettingsSynchronizer {
    /// Export the current tree as a backup envelope
    pub fn export_backup(&self) -> SettingsBackup {
        SettingsBackup::new(self.snapshot().sections)
    }

    /// Best-effort re-apply of a backup.
    ///
    /// Every section is saved through [`SettingsSynchronizer::save_section`],
    /// so each one gets the usual optimistic-then-commit-or-rollback
    /// treatment; a failing section rolls itself back and is recorded in
    /// the report without stopping the rest.
    pub async fn restore_backup(&self, backup: &SettingsBackup) -> RestoreReport {
        let mut report = RestoreReport::default();
        for (section, value) in &backup.settings {
            match self.save_section(section, value.clone()).await {
                Ok(_) => report.applied.push(section.clone()),
                Err(err) => {
                    warn!("Backup restore failed for section {}: {}", section, err);
                    report.failed.push((section.clone(), err.to_string()));
                }
            }
        }
        report
    }
}
