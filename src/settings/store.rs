//! Owned settings store
//!
//! The store is the single owner of the settings tree and the per-section
//! saving flags. Read access is a cloned snapshot or a watch subscription;
//! write access exists only for the synchronizer, through the crate-private
//! primitives below. Every primitive is synchronous, so an optimistic
//! publish is visible before the caller reaches its first await point.

use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tokio::sync::watch;
use tracing::debug;

use super::merge::deep_merge;
use super::types::{SettingsSnapshot, SettingsTree};

#[derive(Debug)]
pub(crate) struct SettingsStore {
    state: watch::Sender<SettingsSnapshot>,
    saving: RwLock<HashMap<String, bool>>,
}

impl SettingsStore {
    /// Create an empty, not-yet-loaded store
    pub(crate) fn new() -> Self {
        let (state, _) = watch::channel(SettingsSnapshot::default());
        Self {
            state,
            saving: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) fn snapshot(&self) -> SettingsSnapshot {
        self.state.borrow().clone()
    }

    pub(crate) fn section(&self, key: &str) -> Option<Value> {
        self.state.borrow().sections.get(key).cloned()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<SettingsSnapshot> {
        self.state.subscribe()
    }

    pub(crate) fn is_saving(&self, key: &str) -> bool {
        self.saving.read().get(key).copied().unwrap_or(false)
    }

    /// Snapshot the current value, publish the optimistic merge and raise
    /// the saving flag. Returns the pre-optimistic value for rollback.
    pub(crate) fn begin_save(&self, key: &str, patch: &Value) -> Option<Value> {
        let mut previous = None;
        self.state.send_modify(|snap| {
            previous = snap.sections.get(key).cloned();
            let base = previous
                .clone()
                .unwrap_or_else(|| Value::Object(Map::new()));
            snap.sections.insert(key.to_string(), deep_merge(&base, patch));
        });
        self.saving.write().insert(key.to_string(), true);
        debug!("Published optimistic value for section {}", key);
        previous
    }

    /// Publish the server-confirmed value and clear the saving flag
    pub(crate) fn commit_save(&self, key: &str, value: Value) {
        self.state.send_modify(|snap| {
            snap.sections.insert(key.to_string(), value);
        });
        self.saving.write().remove(key);
    }

    /// Restore the pre-optimistic value, removing the key if it did not
    /// exist before, and clear the saving flag
    pub(crate) fn rollback_save(&self, key: &str, previous: Option<Value>) {
        self.state.send_modify(|snap| match previous {
            Some(value) => {
                snap.sections.insert(key.to_string(), value);
            }
            None => {
                snap.sections.remove(key);
            }
        });
        self.saving.write().remove(key);
        debug!("Rolled back section {}", key);
    }

    /// Publish a freshly fetched section value without touching saving
    /// flags
    pub(crate) fn put_section(&self, key: &str, value: Value) {
        self.state.send_modify(|snap| {
            snap.sections.insert(key.to_string(), value);
        });
    }

    /// Replace the whole tree, discarding any optimistic guesses
    pub(crate) fn replace(&self, tree: SettingsTree) {
        self.state.send_modify(|snap| {
            snap.loaded = true;
            snap.sections = tree;
        });
    }
}
