use std::time::Duration;

use serde::de::DeserializeOwned;

use super::error::BackendError;
use crate::config::BackendConfig;
use crate::models::{
    ChartData, InventoryData, KpiResponse, LogisticsData, MapData, PriorityResponse, QueryRequest,
    QueryResponse, ReturnsData, SuppliersData,
};

/// Client for the INTELLIA backend.
///
/// Cheap to clone; clones share one connection pool. There is no caching,
/// deduplication or retry: every call is exactly one outbound request.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(http, &config.base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ─── Assistant ───────────────────────────────────────

    /// `POST /api/query`. Blank queries are rejected before any request is made.
    pub async fn process_query(&self, query: &str) -> Result<QueryResponse, BackendError> {
        if query.trim().is_empty() {
            return Err(BackendError::EmptyQuery);
        }

        let url = format!("{}/api/query", self.base_url);
        tracing::debug!("Dispatching assistant query ({} chars) to {url}", query.len());

        let resp = self
            .http
            .post(&url)
            .json(&QueryRequest {
                query: query.to_string(),
            })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Assistant query transport failure: {e}");
                BackendError::Network(e.to_string())
            })?;

        read_json(resp, "Query failed").await
    }

    // ─── Dashboard data ──────────────────────────────────

    pub async fn get_kpis(&self) -> Result<KpiResponse, BackendError> {
        self.get_json("kpis", "Failed to fetch KPIs").await
    }

    pub async fn get_chart_data(&self) -> Result<ChartData, BackendError> {
        self.get_json("charts", "Failed to fetch chart data").await
    }

    pub async fn get_map_data(&self) -> Result<MapData, BackendError> {
        self.get_json("map", "Failed to fetch map data").await
    }

    pub async fn get_inventory_data(&self) -> Result<InventoryData, BackendError> {
        self.get_json("inventory", "Failed to fetch inventory data").await
    }

    pub async fn get_suppliers_data(&self) -> Result<SuppliersData, BackendError> {
        self.get_json("suppliers", "Failed to fetch suppliers data").await
    }

    pub async fn get_logistics_data(&self) -> Result<LogisticsData, BackendError> {
        self.get_json("logistics", "Failed to fetch logistics data").await
    }

    pub async fn get_returns_data(&self) -> Result<ReturnsData, BackendError> {
        self.get_json("returns", "Failed to fetch returns data").await
    }

    pub async fn get_priority_data(&self) -> Result<PriorityResponse, BackendError> {
        self.get_json("priority", "Failed to fetch priority data").await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        failure: &str,
    ) -> Result<T, BackendError> {
        let url = format!("{}/api/{resource}", self.base_url);
        tracing::debug!("GET {url}");

        let resp = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!("GET /api/{resource} transport failure: {e}");
            BackendError::Network(e.to_string())
        })?;

        read_json(resp, failure).await
    }
}

/// Check the status, then decode the body. The body is read as text first so a
/// truncated transfer stays a network error while bad JSON is a backend error.
async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    failure: &str,
) -> Result<T, BackendError> {
    let status = resp.status();
    if !status.is_success() {
        tracing::warn!("{failure}: backend returned {status}");
        return Err(BackendError::Backend {
            status: status.as_u16(),
            message: format!("{failure}: {status}"),
        });
    }

    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        tracing::warn!("{failure}: undecodable body: {e}");
        BackendError::InvalidBody(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_client() -> BackendClient {
        // Nothing listens here; any request that did go out would fail as Network.
        BackendClient::with_client(reqwest::Client::new(), "http://127.0.0.1:9/")
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(unreachable_client().base_url(), "http://127.0.0.1:9");
    }

    #[tokio::test]
    async fn test_empty_query_rejected_before_network() {
        let client = unreachable_client();
        let err = client.process_query("").await.unwrap_err();
        assert!(matches!(err, BackendError::EmptyQuery));
    }

    #[tokio::test]
    async fn test_whitespace_query_rejected_before_network() {
        let client = unreachable_client();
        let err = client.process_query("  \n\t ").await.unwrap_err();
        assert!(matches!(err, BackendError::EmptyQuery));
    }

    #[test]
    fn test_new_builds_from_config() {
        let client = BackendClient::new(&BackendConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
