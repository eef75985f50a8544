//! HTTP client for the telemetry positions endpoint.
//!
//! One GET per call, no retries, no auth. Non-success statuses are reported
//! as [`Error::Status`](crate::Error::Status) and never parsed.

use reqwest::header::ACCEPT;

use crate::telemetry::PositionsResponse;
use crate::{Error, Result};

/// Public positions endpoint of the World Solar Challenge telemetry service.
pub const DEFAULT_ENDPOINT: &str = "https://telemetry.worldsolarchallenge.org/wscearth/api/positions";

const USER_AGENT: &str = concat!("solarboard/", env!("CARGO_PKG_VERSION"));

/// Client for the positions endpoint.
#[derive(Debug, Clone)]
pub struct PositionsClient {
    http: reqwest::Client,
    url: String,
}

impl PositionsClient {
    /// Create a client for the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Endpoint this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the current positions snapshot.
    pub async fn fetch_positions(&self) -> Result<PositionsResponse> {
        tracing::debug!(url = %self.url, "Fetching positions");

        let response = self
            .http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, status = status.as_u16(), "Telemetry request failed");
            return Err(Error::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        let positions: PositionsResponse = serde_json::from_str(&body)?;

        tracing::debug!(
            status = status.as_u16(),
            items = positions.items.len(),
            "Positions received"
        );
        Ok(positions)
    }
}

// ============================================================================
// Tests
// ============================================================================
