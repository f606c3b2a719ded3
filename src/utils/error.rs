//! Error handling for the admin client
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the admin client
pub type Result<T> = std::result::Result<T, AdminError>;

/// Main error type for the admin client
#[derive(Error, Debug)]
pub enum AdminError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid URL errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The backend rejected a request with a non-2xx status.
    ///
    /// The display form is the backend `message` verbatim, because callers
    /// surface it directly in failure notices.
    #[error("{message}")]
    Rejected {
        /// HTTP status code of the rejection
        status: u16,
        /// Backend-provided message
        message: String,
    },

    /// The backend answered 2xx but with a shape the client cannot use
    #[error("Unexpected response shape: {0}")]
    Response(String),

    /// Backup envelope errors
    #[error("Backup error: {0}")]
    Backup(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdminError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a rejection error from a status code and backend message
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Whether this error is a backend rejection (as opposed to a transport
    /// or local failure)
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
