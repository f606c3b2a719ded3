//! Admin backend client implementation

use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::auth::rbac::GroupedPermissions;
use crate::config::ClientConfig;
use crate::settings::SettingsTree;
use crate::utils::error::{AdminError, Result};

/// Response body of a section PATCH
#[derive(Debug, Clone, Deserialize)]
pub struct PatchResponse {
    /// The new committed section value
    pub data: Value,
    /// Present when the patch started an asynchronous server-side flow
    #[serde(default)]
    pub action: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for the settings and permissions endpoints
#[derive(Debug, Clone)]
pub struct AdminApi {
    http: Client,
    base_url: Url,
    user_id: Option<String>,
}

impl AdminApi {
    /// Build a client from a validated configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AdminError::config(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = Url::parse(&config.base_url)?;
        info!("AdminApi created for {}", base_url);

        Ok(Self {
            http,
            base_url,
            user_id: config.user_id.clone(),
        })
    }

    /// Fetch the full settings tree
    pub async fn fetch_settings(&self) -> Result<SettingsTree> {
        let url = self.endpoint(&["settings"])?;
        let response = self.http.get(url).send().await?;
        let body: Value = Self::expect_success(response).await?.json().await?;

        match unwrap_data(body) {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(AdminError::Response(format!(
                "Expected settings object, got {}",
                other
            ))),
        }
    }

    /// Fetch one section's value
    pub async fn fetch_section(&self, section: &str) -> Result<Value> {
        let url = self.endpoint(&["settings", section])?;
        let response = self.http.get(url).send().await?;
        let body: Value = Self::expect_success(response).await?.json().await?;
        Ok(unwrap_data(body))
    }

    /// Send a partial payload for one section.
    ///
    /// The body is the delta only; the server performs its own merge and
    /// answers with the authoritative section value.
    pub async fn patch_section(&self, section: &str, payload: &Value) -> Result<PatchResponse> {
        let url = self.endpoint(&["settings", section])?;
        debug!("Patching section {}", section);
        let response = self.http.patch(url).json(payload).send().await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    /// Fetch a section's prior values, most recent first
    pub async fn section_history(
        &self,
        section: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Value>> {
        let mut url = self.endpoint(&["settings", section, "history"])?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(limit) = limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            if let Some(offset) = offset {
                pairs.append_pair("offset", &offset.to_string());
            }
        }

        let response = self.http.get(url).send().await?;
        let body: Value = Self::expect_success(response).await?.json().await?;

        match unwrap_data(body) {
            Value::Array(entries) => Ok(entries),
            other => Err(AdminError::Response(format!(
                "Expected history array, got {}",
                other
            ))),
        }
    }

    /// Fetch the grouped permission matrix for the acting user
    pub async fn fetch_permissions(&self) -> Result<GroupedPermissions> {
        let url = self.endpoint(&["permissions"])?;
        let response = self.http.get(url).send().await?;
        let body: Value = Self::expect_success(response).await?.json().await?;
        Ok(serde_json::from_value(unwrap_data(body))?)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AdminError::config("Base URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);

        if let Some(user_id) = &self.user_id {
            url.query_pairs_mut().append_pair("user_id", user_id);
        }
        Ok(url)
    }

    /// Turn a non-2xx response into the backend's own message
    async fn expect_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let fallback = format!("Request failed with status {}", status.as_u16());
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => fallback,
        };
        Err(AdminError::rejected(status.as_u16(), message))
    }
}

/// The backend wraps most payloads in `data`; bare payloads are accepted
/// too.
fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    }
}
