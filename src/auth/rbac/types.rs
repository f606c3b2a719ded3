//! Permission wire types and cascade configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single permission record as delivered by the backend.
///
/// The wire format carries the backend's Spanish field names; they are
/// renamed on entry and never used past this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGrant {
    /// Backend row id
    pub id: u64,
    /// Unique permission name, e.g. `"crear_ciudades"`
    #[serde(rename = "nombre")]
    pub name: String,
    /// Human-readable description
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Whether the current subject holds this permission
    #[serde(rename = "asignado")]
    pub assigned: bool,
}

/// Grouped permission matrix: display group name to member permissions.
///
/// Group membership is display-only; authorization itself works on the
/// flattened set of assigned names.
pub type GroupedPermissions = HashMap<String, Vec<PermissionGrant>>;

/// Static configuration of one cascading permission group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeRule {
    /// Whether the group cascades at all
    pub is_cascade: bool,
    /// Name of the gating permission
    pub master_permission: String,
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
}

/// Effective view of a cascading group for one subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeView {
    /// Whether the master permission is effective for the subject
    pub master_on: bool,
    /// Group members excluding the master itself. The caller must render
    /// these as inert/hidden when `master_on` is false.
    pub visible_children: Vec<PermissionGrant>,
}

/// Catalog of cascading group rules, keyed by group name
#[derive(Debug, Clone, Default)]
pub struct CascadeCatalog {
    rules: HashMap<String, CascadeRule>,
}

impl CascadeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in rules for the fleet panel's cascading groups
    pub fn fleet_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            "Vehiculos",
            CascadeRule {
                is_cascade: true,
                master_permission: "gestionar_vehiculos".to_string(),
                title: "Gestión de vehículos".to_string(),
                description: "Habilita la administración de la flota; las acciones individuales \
                              se activan por separado"
                    .to_string(),
            },
        );
        catalog.insert(
            "Notificaciones",
            CascadeRule {
                is_cascade: true,
                master_permission: "gestionar_notificaciones".to_string(),
                title: "Grupos de notificación".to_string(),
                description: "Habilita la administración de grupos de notificación".to_string(),
            },
        );
        catalog.insert(
            "Usuarios",
            CascadeRule {
                is_cascade: true,
                master_permission: "gestionar_usuarios".to_string(),
                title: "Gestión de usuarios".to_string(),
                description: "Habilita la administración de usuarios y sus permisos".to_string(),
            },
        );
        catalog
    }

    /// Add or replace a rule
    pub fn insert(&mut self, group: impl Into<String>, rule: CascadeRule) {
        self.rules.insert(group.into(), rule);
    }

    /// Look up the rule for a group, if it has one
    pub fn rule(&self, group: &str) -> Option<&CascadeRule> {
        self.rules.get(group)
    }

    /// Whether the group cascades
    pub fn is_cascade(&self, group: &str) -> bool {
        self.rules.get(group).map(|r| r.is_cascade).unwrap_or(false)
    }

    /// Number of configured groups
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
