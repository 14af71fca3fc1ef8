// src/models/route.rs
// DOCUMENTATION: Driving route models
// PURPOSE: OSRM Route API response types and the summary returned to clients

use serde::{Deserialize, Serialize};

/// OSRM Route API response
/// DOCUMENTATION: `code` is "Ok" on success; otherwise `message` explains why
#[derive(Debug, Deserialize)]
pub struct OsrmRouteResponse {
    pub code: String,
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

impl OsrmRouteResponse {
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }
}

/// One route alternative as returned by OSRM
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Meters
    pub distance: f64,
    /// Seconds
    pub duration: f64,
    /// Requested with `geometries=geojson`
    pub geometry: geojson::Geometry,
}

/// Route returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_m: f64,
    pub duration_s: f64,
    pub geometry: geojson::Geometry,
}

impl From<OsrmRoute> for RouteSummary {
    fn from(route: OsrmRoute) -> Self {
        Self {
            distance_m: route.distance,
            duration_s: route.duration,
            geometry: route.geometry,
        }
    }
}

/// Query parameters for GET /api/route/directions
#[derive(Debug, Deserialize)]
pub struct DirectionsQuery {
    pub start_lat: Option<String>,
    pub start_lon: Option<String>,
    pub end_lat: Option<String>,
    pub end_lon: Option<String>,
}

/// Query parameters for GET /api/route/review
#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
    pub review_id: Option<String>,
}
