//! Typed HTTP client for the SaaS Pulse backend API.
//!
//! One method per endpoint, each a single GET with JSON decoding and a
//! uniform error path. No retries, no caching, no shared state between
//! calls; repeated calls always re-fetch.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use models::{HealthStatus, HistoryResponse, KpiSummary, TransactionsResponse};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_HISTORY_RANGE: &str = "30d";
const DEFAULT_TRANSACTIONS_LIMIT: u32 = 5;

#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The backend answered with a non-success status. The body is not read.
    #[error("API error: {0}")]
    Status(u16),

    /// The request never completed (connection refused, DNS, ...).
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// A success response carried a body that is not the expected JSON.
    /// Treated as a backend/client contract violation, not retried.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Configuration for talking to the SaaS Pulse backend.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
}

impl ApiClientConfig {
    /// Loads config from env vars:
    /// - `SAAS_PULSE_API_URL` (default: `http://localhost:8000`)
    pub fn from_env() -> Self {
        let base_url = std::env::var("SAAS_PULSE_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Async client for the dashboard REST API.
///
/// The base URL is resolved once at construction; every endpoint lives
/// under the fixed `/api` prefix.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    api_base: String,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiClientError> {
        let http = Client::builder()
            .build()
            .map_err(ApiClientError::Transport)?;

        Ok(Self {
            http,
            api_base: format!("{}/api", config.base_url),
        })
    }

    /// Shared helper: one GET, status check, JSON decode.
    async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiClientError> {
        let url = format!("{}{}", self.api_base, endpoint);
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ApiClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiClientError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(ApiClientError::Decode)
    }

    /// `GET /api/status`
    pub async fn get_status(&self) -> Result<HealthStatus, ApiClientError> {
        self.fetch_json("/status").await
    }

    /// `GET /api/kpi/summary`
    pub async fn get_kpi_summary(&self) -> Result<KpiSummary, ApiClientError> {
        self.fetch_json("/kpi/summary").await
    }

    /// `GET /api/kpi/history?range=<range>`
    ///
    /// `range` defaults to `"30d"` and is passed through verbatim; the
    /// backend is the authority on accepted values.
    pub async fn get_history(
        &self,
        range: Option<&str>,
    ) -> Result<HistoryResponse, ApiClientError> {
        let range = range.unwrap_or(DEFAULT_HISTORY_RANGE);
        self.fetch_json(&format!("/kpi/history?range={range}")).await
    }

    /// `GET /api/transactions?limit=<limit>`
    ///
    /// `limit` defaults to 5 and is passed through verbatim.
    pub async fn get_transactions(
        &self,
        limit: Option<u32>,
    ) -> Result<TransactionsResponse, ApiClientError> {
        let limit = limit.unwrap_or(DEFAULT_TRANSACTIONS_LIMIT);
        self.fetch_json(&format!("/transactions?limit={limit}")).await
    }
}
