//! Test fixtures in the backend's wire shape
//!
//! All factories produce the JSON the real backend sends, Spanish field
//! names included, so tests exercise the same normalization the panel does.

use serde_json::{Value, json};

/// A full settings tree, wrapped in the backend's `data` envelope
pub fn settings_tree_body() -> Value {
    json!({
        "data": {
            "apariencia": appearance_section(),
            "seguridad": security_section(),
            "flota": { "max_vehiculos": 50 }
        }
    })
}

/// The appearance section as initially loaded
pub fn appearance_section() -> Value {
    json!({ "mode": "light", "brand": "default" })
}

/// The security section as initially loaded
pub fn security_section() -> Value {
    json!({ "require_2fa": false, "session_timeout": 30 })
}

/// A grouped permission matrix for a non-admin operator
pub fn grouped_permissions_body() -> Value {
    json!({
        "data": {
            "Vehiculos": [
                { "id": 1, "nombre": "gestionar_vehiculos", "descripcion": "Gestionar vehículos", "asignado": true },
                { "id": 2, "nombre": "crear_vehiculos", "descripcion": "Crear vehículos", "asignado": true },
                { "id": 3, "nombre": "eliminar_vehiculos", "descripcion": "Eliminar vehículos", "asignado": false }
            ],
            "Ciudades": [
                { "id": 4, "nombre": "crear_ciudades", "descripcion": "Crear ciudades", "asignado": true },
                { "id": 5, "nombre": "eliminar_ciudades", "descripcion": "Eliminar ciudades", "asignado": false }
            ]
        }
    })
}
