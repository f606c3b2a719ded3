//! Common test utilities for fleetadmin-rs
//!
//! Provides payload fixtures in the backend's wire shape and helpers for
//! wiring the client against a wiremock backend.

pub mod fixtures;

use fleetadmin_rs::{AdminApi, ClientConfig, SettingsSynchronizer};
use wiremock::MockServer;

/// Build an [`AdminApi`] pointed at a mock backend
pub fn api_for(server: &MockServer) -> AdminApi {
    AdminApi::new(&ClientConfig::new(server.uri())).expect("client config should be valid")
}

/// Build an [`AdminApi`] acting as a specific user
pub fn api_for_user(server: &MockServer, user_id: &str) -> AdminApi {
    let config = ClientConfig::builder(server.uri())
        .user_id(user_id)
        .build()
        .expect("client config should be valid");
    AdminApi::new(&config).expect("client config should be valid")
}

/// Build a synchronizer pointed at a mock backend
pub fn synchronizer_for(server: &MockServer) -> SettingsSynchronizer {
    SettingsSynchronizer::new(api_for(server))
}
