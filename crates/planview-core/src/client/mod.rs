//! HTTP client for the plan server.
//!
//! The server exposes two endpoints that planview consumes:
//!
//! - `GET /api/status` reports whether the server's AI mode is available.
//! - `POST /api/generate-plan` takes `{ "goal": ... }` and answers with a plan
//!   document.
//!
//! Responses to plan requests are run through the validator before they are
//! returned, so callers only ever see a valid [`PlanDocument`]. Failures are
//! not retried; the caller decides whether to try again.
//!
//! # Usage
//!
//! ```rust,no_run
//! use planview_core::{params::GeneratePlan, PlanClientBuilder};
//!
//! # async fn example() -> Result<(), planview_core::PlanError> {
//! let client = PlanClientBuilder::new()
//!     .with_base_url("http://127.0.0.1:5000")
//!     .build()?;
//!
//! let status = client.status().await?;
//! let plan = client.generate_plan(&GeneratePlan::new("Launch an app in 3 weeks")).await?;
//! println!("{} phases, AI mode: {}", plan.phases.len(), status.google_ai);
//! # Ok(())
//! # }
//! ```

use log::{debug, info};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::{
    error::{NetworkResultExt, PlanError, Result},
    models::PlanDocument,
    params::GeneratePlan,
    validate::parse_plan,
};

pub mod builder;


pub use builder::PlanClientBuilder;

/// Answer of `GET /api/status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiStatus {
    /// Whether the server can enhance plans with its AI service
    #[serde(default)]
    pub google_ai: bool,

    /// Free-form server status, e.g. `"online"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Server version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Client for the plan server.
#[derive(Debug, Clone)]
pub struct PlanClient {
    http: Client,
    base_url: String,
}

impl PlanClient {
    pub(crate) fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query the server status.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Network` if the request fails or the server answers
    /// with a non-success status.
    pub async fn status(&self) -> Result<ApiStatus> {
        let url = self.endpoint("/api/status");
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .network_context("Status request failed")?;
        let response = ensure_success(response)?;

        response
            .json::<ApiStatus>()
            .await
            .network_context("Invalid status response")
    }

    /// Request a plan for a goal.
    ///
    /// The goal is trimmed first; an empty goal is rejected without contacting
    /// the server.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` for an empty goal,
    /// `PlanError::Network` if the request fails or the server answers with a
    /// non-success status, and `PlanError::MalformedPlan` or
    /// `PlanError::Serialization` if the answer is not a valid plan.
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<PlanDocument> {
        let params = params.trimmed();
        if params.goal.is_empty() {
            return Err(PlanError::invalid_input("goal").with_reason("Please enter a goal"));
        }

        let url = self.endpoint("/api/generate-plan");
        info!("Requesting plan for '{}'", params.goal);

        let response = self
            .http
            .post(&url)
            .json(&params)
            .send()
            .await
            .network_context("Plan request failed")?;
        let response = ensure_success(response)?;

        let body = response
            .text()
            .await
            .network_context("Failed to read plan response")?;
        let plan = parse_plan(&body)?;

        info!(
            "Received plan with {} phases for '{}'",
            plan.phases.len(),
            plan.goal
        );
        Ok(plan)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(PlanError::network(format!("Server answered {status}")))
    }
}
