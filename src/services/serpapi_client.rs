// src/services/serpapi_client.rs
// DOCUMENTATION: SerpAPI client
// PURPOSE: Fetch nearby attractions and check SerpAPI connectivity

use crate::errors::ApiError;
use crate::models::{CanonicalPlace, Coordinates};
use crate::services::{detect_source, normalize, HttpExecutor, RequestDescriptor, ResultSource};
use serde_json::Value;

/// Value shipped in the sample .env; treated as "not configured"
pub const PLACEHOLDER_API_KEY: &str = "MY_SERPAPI_KEY_HERE";

/// Query used by the connectivity check
pub const TEST_QUERY: &str = "tourist attractions in New York";

const PROVIDER: &str = "SERPAPI";

/// Outcome of a connectivity check
#[derive(Debug, Clone)]
pub struct ConnectionReport {
    pub test_query: String,
    /// Collection normalization would read, if any is populated
    pub source: Option<ResultSource>,
    /// Whether any result collection key came back at all
    pub has_results: bool,
    /// Raw test response, echoed back when it has no results
    pub body: Value,
}

/// Any result collection key carrying a value, even an empty list
/// DOCUMENTATION: Only null, false, 0 and "" count as missing. An empty
/// collection still proves the key and the search work.
fn has_any_collection(payload: &Value) -> bool {
    [ResultSource::Local, ResultSource::Organic, ResultSource::Places]
        .iter()
        .filter_map(|source| payload.get(source.collection_key()))
        .any(|value| match value {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(n) => n.as_f64() != Some(0.0),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        })
}

/// SerpAPI client
/// DOCUMENTATION: Uses the google_maps engine for coordinate-based attraction
/// search and the google engine for the connectivity check
#[derive(Clone)]
pub struct SerpApiClient {
    executor: HttpExecutor,
    api_key: String,
    base_url: String,
}

impl SerpApiClient {
    pub fn new(executor: HttpExecutor, api_key: String, base_url: String) -> Self {
        Self {
            executor,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != PLACEHOLDER_API_KEY
    }

    fn api_key(&self) -> Result<&str, ApiError> {
        log::info!(
            "Checking SERPAPI_KEY... Loaded: {}, Length: {}",
            !self.api_key.is_empty(),
            self.api_key.len()
        );

        if !self.is_configured() {
            log::error!("SERPAPI_KEY is missing or default");
            return Err(ApiError::NotConfigured(
                "SERPAPI_KEY not configured in backend .env file".to_string(),
            ));
        }
        Ok(&self.api_key)
    }

    fn search_url(&self) -> String {
        format!("{}/search.json", self.base_url)
    }

    /// Fetch tourist attractions around a point
    /// DOCUMENTATION: Missing keys are rejected before any network call.
    /// Payloads without a recognizable result collection yield an empty list.
    pub async fn fetch_attractions(
        &self,
        point: Coordinates,
    ) -> Result<Vec<CanonicalPlace>, ApiError> {
        let api_key = self.api_key()?;

        let request = RequestDescriptor::get(self.search_url())
            .query("engine", "google_maps")
            .query("q", "tourist attractions")
            .query("ll", format!("@{},{},14z", point.lat, point.lon))
            .query("api_key", api_key)
            .query("type", "search")
            .query("num", 10);

        log::info!(
            "Fetching attractions for coordinates: {}, {}",
            point.lat,
            point.lon
        );

        let response = self
            .executor
            .execute(&request)
            .await
            .map_err(|e| ApiError::from_upstream(PROVIDER, "Failed to fetch attractions", e))?;

        let attractions = normalize(&response.body, Some(ResultSource::Local));
        log::info!("Found {} attractions", attractions.len());
        Ok(attractions)
    }

    /// Run a one-result web search to verify key and connectivity
    pub async fn test_connection(&self) -> Result<ConnectionReport, ApiError> {
        let api_key = self.api_key()?;

        let request = RequestDescriptor::get(self.search_url())
            .query("engine", "google")
            .query("q", TEST_QUERY)
            .query("api_key", api_key)
            .query("num", 1);

        log::info!("Testing SerpAPI connection...");

        let response = self
            .executor
            .execute(&request)
            .await
            .map_err(|e| ApiError::from_upstream(PROVIDER, "SERPAPI FAILED", e))?;

        Ok(ConnectionReport {
            test_query: TEST_QUERY.to_string(),
            source: detect_source(&response.body),
            has_results: has_any_collection(&response.body),
            body: response.body,
        })
    }
}
