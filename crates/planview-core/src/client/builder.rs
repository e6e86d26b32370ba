//! Builder for creating and configuring PlanClient instances.

use std::time::Duration;

use reqwest::{Client, Url};

use super::PlanClient;
use crate::error::{PlanError, Result};

/// Server address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Builder for creating and configuring PlanClient instances.
#[derive(Debug, Clone)]
pub struct PlanClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl PlanClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the server base URL, e.g. `http://127.0.0.1:5000`.
    ///
    /// If not specified, uses [`DEFAULT_BASE_URL`].
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` if the base URL is not an http(s)
    /// URL and `PlanError::Configuration` if the HTTP client cannot be created.
    pub fn build(self) -> Result<PlanClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        let url = Url::parse(&base_url).map_err(|e| {
            PlanError::invalid_input("base_url").with_reason(format!("'{base_url}': {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(PlanError::invalid_input("base_url")
                .with_reason(format!("'{base_url}' is not an http(s) URL")));
        }

        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| PlanError::Configuration {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(PlanClient::new(http, base_url))
    }
}

impl Default for PlanClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
