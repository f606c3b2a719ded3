//! Settings state types

use serde_json::Value;
use std::collections::HashMap;

/// Section keys the fleet panel is known to use. The tree itself stays
/// open-keyed; these are conveniences for call sites.
pub mod sections {
    /// Security settings, including 2FA enrollment state
    pub const SECURITY: &str = "seguridad";
    /// Appearance settings
    pub const APPEARANCE: &str = "apariencia";
    /// Notification group settings
    pub const NOTIFICATIONS: &str = "notificaciones";
    /// Fleet-wide defaults
    pub const FLEET: &str = "flota";
}

/// Section-keyed settings tree
pub type SettingsTree = HashMap<String, Value>;

/// State published to subscribers.
///
/// `loaded` distinguishes "initial fetch has not landed" from "loaded and
/// empty": while it is false every section reads as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsSnapshot {
    /// Whether the initial bulk fetch (or a reload) has landed
    pub loaded: bool,
    /// Current section values
    pub sections: SettingsTree,
}

impl SettingsSnapshot {
    /// Current value of one section
    pub fn section(&self, key: &str) -> Option<&Value> {
        self.sections.get(key)
    }
}

/// Outcome of a successful section save
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    /// The committed section value, as returned by the server
    pub value: Value,
    /// Present when the patch started an asynchronous server-side flow
    /// (e.g. 2FA enrollment) instead of settling directly. The value above
    /// is committed either way; the caller must not treat an unsettled
    /// outcome as a terminal success.
    pub action: Option<Value>,
}

impl SaveOutcome {
    /// Whether the save settled directly, with no follow-up flow pending
    pub fn is_settled(&self) -> bool {
        self.action.is_none()
    }
}
