// src/models/geocode.rs
// DOCUMENTATION: Geocoding models
// PURPOSE: Nominatim search results and the normalized geocode shape

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Raw Nominatim search entry
/// DOCUMENTATION: Nominatim encodes coordinates as strings
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl NominatimPlace {
    /// Convert to a geocode result; None when the coordinates do not parse
    pub fn to_result(&self) -> Option<GeocodeResult> {
        let lat = self.lat.trim().parse::<f64>().ok()?;
        let lon = self.lon.trim().parse::<f64>().ok()?;
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }

        Some(GeocodeResult {
            name: self.display_name.clone(),
            coordinates: Coordinates::new(lat, lon),
            kind: self.kind.clone(),
        })
    }
}

/// A place name resolved to coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub name: String,
    pub coordinates: Coordinates,
    /// Provider classification (city, station, ...)
    pub kind: Option<String>,
}

/// Query parameters for GET /api/geocode
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    pub q: Option<String>,
}

/// Response body for GET /api/geocode
#[derive(Debug, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    pub results: Vec<GeocodeResult>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nominatim(lat: &str, lon: &str) -> NominatimPlace {
        NominatimPlace {
            display_name: "Chennai Central".to_string(),
            lat: lat.to_string(),
            lon: lon.to_string(),
            kind: Some("station".to_string()),
        }
    }

    #[test]
    fn test_string_coordinates_are_parsed() {
        let result = nominatim("13.0827", "80.2707").to_result().unwrap();
        assert_eq!(result.coordinates, Coordinates::new(13.0827, 80.2707));
        assert_eq!(result.kind.as_deref(), Some("station"));
    }

    #[test]
    fn test_unparseable_coordinates_are_dropped() {
        assert!(nominatim("north", "80.27").to_result().is_none());
        assert!(nominatim("NaN", "80.27").to_result().is_none());
    }
}
