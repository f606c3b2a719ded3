//! Configuration for the admin client
//!
//! This module handles construction and validation of the client
//! configuration: where the REST backend lives, which user the panel acts
//! as, and the HTTP timeout.

use crate::utils::error::{AdminError, Result};
use tracing::{debug, info};
use url::Url;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST backend, e.g. `https://api.example.com/admin`
    pub base_url: String,
    /// Acting user id, appended as `user_id` query parameter when set
    pub user_id: Option<String>,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a configuration with defaults for everything but the base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_id: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Start building a configuration
    pub fn builder(base_url: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder {
            config: Self::new(base_url),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `FLEETADMIN_BASE_URL` (required), `FLEETADMIN_USER_ID` and
    /// `FLEETADMIN_TIMEOUT_SECS`. A `.env` file is honored when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        info!("Loading configuration from environment variables");

        let base_url = std::env::var("FLEETADMIN_BASE_URL")
            .map_err(|_| AdminError::config("FLEETADMIN_BASE_URL is not set"))?;

        let mut config = Self::new(base_url);

        if let Ok(user_id) = std::env::var("FLEETADMIN_USER_ID") {
            if !user_id.is_empty() {
                config.user_id = Some(user_id);
            }
        }

        if let Ok(timeout) = std::env::var("FLEETADMIN_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().map_err(|_| {
                AdminError::config(format!("Invalid FLEETADMIN_TIMEOUT_SECS: {}", timeout))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| AdminError::config(format!("Invalid base URL: {}", e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(AdminError::config(format!(
                "Unsupported URL scheme: {}",
                url.scheme()
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AdminError::config("Timeout must be greater than zero"));
        }

        debug!("Configuration validated for {}", self.base_url);
        Ok(())
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug)]
pub struct ConfigBuilder {
    config: ClientConfig,
}

impl ConfigBuilder {
    /// Set the acting user id
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.config.user_id = Some(user_id.into());
        self
    }

    /// Set the HTTP timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Validate and produce the configuration
    pub fn build(self) -> Result<ClientConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
