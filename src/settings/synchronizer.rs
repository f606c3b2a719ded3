//! The settings synchronizer
//!
//! Public façade over the owned store and the REST client. Runs the
//! optimistic-apply / commit-or-rollback protocol described on
//! [`SettingsSynchronizer::save_section`].

use serde_json::Value;
use tokio::sync::watch;
use tracing::{info, warn};

use super::store::SettingsStore;
use super::types::{SaveOutcome, SettingsSnapshot};
use crate::sdk::AdminApi;
use crate::utils::error::Result;

/// Owns the settings tree and keeps it in sync with the backend
#[derive(Debug)]
pub struct SettingsSynchronizer {
    api: AdminApi,
    store: SettingsStore,
}

impl SettingsSynchronizer {
    /// Create a synchronizer with an empty, not-yet-loaded tree
    pub fn new(api: AdminApi) -> Self {
        Self {
            api,
            store: SettingsStore::new(),
        }
    }

    /// Initial bulk load of the full tree.
    ///
    /// On failure the tree stays empty and unloaded; there is no automatic
    /// retry, callers re-attempt via [`Self::reload`].
    pub async fn load(&self) -> Result<()> {
        info!("Loading settings tree");
        let tree = self.api.fetch_settings().await?;
        self.store.replace(tree);
        Ok(())
    }

    /// Re-fetch the whole tree and replace it wholesale. Any in-flight
    /// optimistic guesses are discarded as soon as the fresh tree lands.
    pub async fn reload(&self) -> Result<()> {
        info!("Reloading settings tree");
        let tree = self.api.fetch_settings().await?;
        self.store.replace(tree);
        Ok(())
    }

    /// Current state of the whole tree
    pub fn snapshot(&self) -> SettingsSnapshot {
        self.store.snapshot()
    }

    /// Current value of one section.
    ///
    /// `None` means either "still loading" or "no such section"; check
    /// [`SettingsSnapshot::loaded`] on [`Self::snapshot`] to tell them
    /// apart.
    pub fn section(&self, key: &str) -> Option<Value> {
        self.store.section(key)
    }

    /// Whether a patch is currently in flight for the section
    pub fn is_saving(&self, key: &str) -> bool {
        self.store.is_saving(key)
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<SettingsSnapshot> {
        self.store.subscribe()
    }

    /// Patch one section.
    ///
    /// The optimistic merge of the current value and `patch` is published
    /// synchronously, before the request goes out; readers sampling the
    /// tree after this call starts see the merged value. The backend
    /// receives only the delta and answers with the authoritative section
    /// value, which replaces the optimistic guess on success. On failure
    /// the pre-call value is restored first and the error re-raised with
    /// the backend message, so callers decide the user-facing notice.
    ///
    /// Concurrent saves to the same section are not serialized: each one
    /// merges onto whatever the tree holds when it starts, and whichever
    /// response resolves last wins.
    pub async fn save_section(&self, key: &str, patch: Value) -> Result<SaveOutcome> {
        let previous = self.store.begin_save(key, &patch);

        match self.api.patch_section(key, &patch).await {
            Ok(response) => {
                self.store.commit_save(key, response.data.clone());
                if response.action.is_some() {
                    info!("Section {} patch started a server-side flow", key);
                }
                Ok(SaveOutcome {
                    value: response.data,
                    action: response.action,
                })
            }
            Err(err) => {
                self.store.rollback_save(key, previous);
                warn!("Section {} patch rejected, rolled back: {}", key, err);
                Err(err)
            }
        }
    }

    /// Re-fetch a single section and publish it, leaving the rest of the
    /// tree untouched. Useful once a server-side flow started by a save
    /// (e.g. 2FA enrollment) settles outside the normal save path.
    pub async fn refresh_section(&self, key: &str) -> Result<Value> {
        let value = self.api.fetch_section(key).await?;
        self.store.put_section(key, value.clone());
        Ok(value)
    }

    /// Prior values of a section, most recent first
    pub async fn section_history(
        &self,
        key: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Value>> {
        self.api.section_history(key, limit, offset).await
    }
}
