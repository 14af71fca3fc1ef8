// src/services/nominatim_client.rs
// DOCUMENTATION: Nominatim geocoding client
// PURPOSE: Resolve free-text place names to coordinates

use crate::errors::ApiError;
use crate::models::{GeocodeResult, NominatimPlace};
use crate::services::{HttpExecutor, RequestDescriptor};
use serde::Deserialize;

const PROVIDER: &str = "NOMINATIM";

/// Nominatim search client
#[derive(Clone)]
pub struct NominatimClient {
    executor: HttpExecutor,
    base_url: String,
    limit: u32,
}

impl NominatimClient {
    pub fn new(executor: HttpExecutor, base_url: String, limit: u32) -> Self {
        Self {
            executor,
            base_url: base_url.trim_end_matches('/').to_string(),
            limit,
        }
    }

    /// Search for a place name
    /// DOCUMENTATION: Malformed entries and entries with unparseable
    /// coordinates are skipped; only a non-list body is an error
    pub async fn search(&self, query: &str) -> Result<Vec<GeocodeResult>, ApiError> {
        let request = RequestDescriptor::get(format!("{}/search", self.base_url))
            .query("q", query)
            .query("format", "json")
            .query("limit", self.limit);

        log::debug!("Nominatim search: q={}", query);

        let response = self
            .executor
            .execute(&request)
            .await
            .map_err(|e| ApiError::from_upstream(PROVIDER, "Failed to geocode location", e))?;

        let Some(entries) = response.body.as_array() else {
            log::error!("Nominatim response is not a list: {}", response.body);
            return Err(ApiError::UnexpectedPayload {
                provider: PROVIDER.to_string(),
                message: "expected a list of places".to_string(),
            });
        };

        let results: Vec<GeocodeResult> = entries
            .iter()
            .filter_map(|entry| match NominatimPlace::deserialize(entry) {
                Ok(place) => place.to_result(),
                Err(e) => {
                    log::debug!("Skipping malformed Nominatim entry: {}", e);
                    None
                }
            })
            .collect();
        log::info!("Geocoded '{}' to {} results", query, results.len());
        Ok(results)
    }
}
