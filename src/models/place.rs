// src/models/place.rs
// DOCUMENTATION: Canonical place records and attraction DTOs
// PURPOSE: Provider-agnostic shape returned to clients for points of interest

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Placeholder name for entries without a title or name
pub const UNKNOWN_NAME: &str = "Unknown";

/// Placeholder address for entries without any address information
pub const ADDRESS_NOT_AVAILABLE: &str = "Address not available";

/// Geographic coordinates in decimal degrees
/// DOCUMENTATION: Range rules are checked by the handlers before any upstream call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinates {
    /// Latitude (-90 to 90)
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    /// Longitude (-180 to 180)
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinates> for geo_types::Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        geo_types::Point::new(coordinates.lon, coordinates.lat)
    }
}

/// Normalized point of interest
/// DOCUMENTATION: One record per upstream result entry. `name` and `address`
/// are never empty; missing optional values serialize as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalPlace {
    pub name: String,
    pub address: String,
    /// Average rating as reported by the provider
    pub rating: Option<f64>,
    /// Number of reviews
    pub reviews: Option<u64>,
    pub coordinates: Option<Coordinates>,
    /// Photo URLs, possibly empty
    pub photos: Vec<String>,
}

/// Query parameters for GET /api/attractions
/// DOCUMENTATION: Kept as raw strings so missing and malformed values get
/// distinct error messages
#[derive(Debug, Deserialize)]
pub struct AttractionsQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Response body for GET /api/attractions
#[derive(Debug, Serialize, Deserialize)]
pub struct AttractionsResponse {
    pub status: String,
    pub attractions: Vec<CanonicalPlace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AttractionsResponse {
    pub fn found(attractions: Vec<CanonicalPlace>) -> Self {
        Self {
            status: "ok".to_string(),
            count: Some(attractions.len()),
            attractions,
            message: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            status: "ok".to_string(),
            attractions: Vec::new(),
            count: None,
            message: Some("No attractions found for this location".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_place_serialization() {
        let place = CanonicalPlace {
            name: "Marina Beach".to_string(),
            address: ADDRESS_NOT_AVAILABLE.to_string(),
            rating: None,
            reviews: Some(1200),
            coordinates: Some(Coordinates::new(13.05, 80.28)),
            photos: vec![],
        };

        assert_eq!(
            serde_json::to_value(&place).unwrap(),
            json!({
                "name": "Marina Beach",
                "address": "Address not available",
                "rating": null,
                "reviews": 1200,
                "coordinates": { "lat": 13.05, "lon": 80.28 },
                "photos": []
            })
        );
    }

    #[test]
    fn test_coordinate_range_validation() {
        assert!(Coordinates::new(13.08, 80.27).validate().is_ok());
        assert!(Coordinates::new(-90.0, 180.0).validate().is_ok());
        assert!(Coordinates::new(90.5, 0.0).validate().is_err());
        assert!(Coordinates::new(0.0, -180.1).validate().is_err());
    }

    #[test]
    fn test_point_conversion_is_lon_lat() {
        let point: geo_types::Point<f64> = Coordinates::new(13.08, 80.27).into();
        assert_eq!(point.x(), 80.27);
        assert_eq!(point.y(), 13.08);
    }

    #[test]
    fn test_empty_response_has_message_and_no_count() {
        let body = serde_json::to_value(AttractionsResponse::empty()).unwrap();
        assert_eq!(body["attractions"], json!([]));
        assert_eq!(body["message"], "No attractions found for this location");
        assert!(body.get("count").is_none());
    }
}
