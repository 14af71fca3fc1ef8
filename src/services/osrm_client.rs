// src/services/osrm_client.rs
// DOCUMENTATION: OSRM routing client
// PURPOSE: Request driving routes between two points

use crate::errors::ApiError;
use crate::models::{OsrmRouteResponse, RouteSummary};
use crate::services::{HttpExecutor, RequestDescriptor};
use geo_types::Point;

const PROVIDER: &str = "OSRM";

/// OSRM Route service client
#[derive(Clone)]
pub struct OsrmClient {
    executor: HttpExecutor,
    base_url: String,
}

impl OsrmClient {
    pub fn new(executor: HttpExecutor, base_url: String) -> Self {
        Self {
            executor,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fastest driving route from `from` to `to`
    /// DOCUMENTATION: Points are (x = longitude, y = latitude). OSRM takes
    /// coordinates as lon,lat pairs separated by ';'.
    pub async fn driving_route(
        &self,
        from: Point<f64>,
        to: Point<f64>,
    ) -> Result<RouteSummary, ApiError> {
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.base_url,
            from.x(),
            from.y(),
            to.x(),
            to.y()
        );
        let request = RequestDescriptor::get(url)
            .query("overview", "full")
            .query("geometries", "geojson");

        let response = self
            .executor
            .execute(&request)
            .await
            .map_err(|e| ApiError::from_upstream(PROVIDER, "Failed to fetch route", e))?;

        let parsed: OsrmRouteResponse = serde_json::from_value(response.body).map_err(|e| {
            log::error!("Failed to parse OSRM response: {}", e);
            unexpected(e.to_string())
        })?;

        if !parsed.is_ok() {
            let message = parsed
                .message
                .unwrap_or_else(|| format!("status {}", parsed.code));
            return Err(unexpected(message));
        }

        let route = parsed
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| unexpected("no route found".to_string()))?;

        log::info!(
            "Route found: {:.0}m, {:.0}s",
            route.distance,
            route.duration
        );
        Ok(route.into())
    }
}

fn unexpected(message: String) -> ApiError {
    ApiError::UnexpectedPayload {
        provider: PROVIDER.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ReqwestTransport, RetryPolicy};
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::Arc;
    use tokio_test::{assert_err, assert_ok};

    fn client(base_url: String) -> OsrmClient {
        let transport = ReqwestTransport::with_client(reqwest::Client::new());
        let executor = HttpExecutor::new(Arc::new(transport), RetryPolicy::new(1, 1));
        OsrmClient::new(executor, base_url)
    }

    #[tokio::test]
    async fn test_route_uses_lon_lat_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/route/v1/driving/80.2707,13.0827;80.2496,13.0604")
                    .query_param("overview", "full")
                    .query_param("geometries", "geojson");
                then.status(200).json_body(json!({
                    "code": "Ok",
                    "routes": [{
                        "distance": 4123.4,
                        "duration": 612.9,
                        "geometry": {
                            "type": "LineString",
                            "coordinates": [[80.2707, 13.0827], [80.2496, 13.0604]]
                        }
                    }]
                }));
            })
            .await;

        let route = assert_ok!(
            client(server.base_url())
                .driving_route(Point::new(80.2707, 13.0827), Point::new(80.2496, 13.0604))
                .await
        );

        mock.assert_async().await;
        assert_eq!(route.distance_m, 4123.4);
        assert_eq!(route.duration_s, 612.9);
    }

    #[tokio::test]
    async fn test_no_route_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200).json_body(json!({ "code": "Ok", "routes": [] }));
            })
            .await;

        let result = client(server.base_url())
            .driving_route(Point::new(0.0, 0.0), Point::new(1.0, 1.0))
            .await;

        assert!(matches!(assert_err!(result), ApiError::UnexpectedPayload { .. }));
    }

    #[tokio::test]
    async fn test_invalid_query_is_not_retried() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(400)
                    .json_body(json!({ "code": "InvalidQuery", "message": "Query string malformed" }));
            })
            .await;

        let result = client(server.base_url())
            .driving_route(Point::new(0.0, 0.0), Point::new(1.0, 1.0))
            .await;

        assert!(matches!(assert_err!(result), ApiError::Upstream { .. }));
        mock.assert_hits_async(1).await;
    }
}
