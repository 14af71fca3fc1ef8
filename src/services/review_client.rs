// src/services/review_client.rs
// DOCUMENTATION: RapidAPI maps-data review client
// PURPOSE: Fetch a single place review by id

use crate::errors::ApiError;
use crate::services::{HttpExecutor, RequestDescriptor};
use serde_json::Value;

const PROVIDER: &str = "RAPIDAPI";

#[derive(Clone)]
pub struct ReviewClient {
    executor: HttpExecutor,
    api_key: String,
    api_host: String,
    base_url: String,
}

impl ReviewClient {
    pub fn new(executor: HttpExecutor, api_key: String, api_host: String, base_url: String) -> Self {
        Self {
            executor,
            api_key,
            api_host,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch review data; the upstream body is returned untouched
    pub async fn review(&self, review_id: &str) -> Result<Value, ApiError> {
        if self.api_key.is_empty() {
            return Err(ApiError::NotConfigured(
                "RAPIDAPI_KEY not configured in backend .env file".to_string(),
            ));
        }

        let request = RequestDescriptor::get(format!("{}/review.php", self.base_url))
            .query("review_id", review_id)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host);

        let response = self
            .executor
            .execute(&request)
            .await
            .map_err(|e| ApiError::from_upstream(PROVIDER, "RapidAPI request failed", e))?;

        Ok(response.body)
    }
}
