//! REST access to the admin backend
//!
//! One thin client over the settings and permissions endpoints. Paths and
//! query parameters live here and nowhere else; the rest of the crate only
//! sees typed results.

pub mod client;

pub use client::{AdminApi, PatchResponse};

/// Initialize default logging for binaries and examples
pub fn init() {
    tracing_subscriber::fmt::init();
}
