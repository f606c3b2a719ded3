//! Shared utilities
//!
//! Currently this only hosts the crate-wide error type.

pub mod error;

pub use error::{AdminError, Result};
