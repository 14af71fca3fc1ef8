// src/handlers/query.rs
// DOCUMENTATION: Query parameter parsing shared by handlers
// PURPOSE: Reject caller input errors before any upstream call

use crate::errors::ApiError;
use crate::models::Coordinates;
use validator::Validate;

/// Parse a latitude/longitude pair from raw query values
/// DOCUMENTATION: Distinguishes missing, non-numeric and out-of-range input
pub fn parse_coordinates(
    lat: Option<&str>,
    lon: Option<&str>,
    lat_name: &str,
    lon_name: &str,
) -> Result<Coordinates, ApiError> {
    let (Some(lat), Some(lon)) = (present(lat), present(lon)) else {
        return Err(ApiError::InvalidInput(format!(
            "{} and {} query parameters are required",
            lat_name, lon_name
        )));
    };

    let (Some(lat), Some(lon)) = (number(lat), number(lon)) else {
        return Err(ApiError::InvalidInput(format!(
            "{} and {} must be valid numbers",
            lat_name, lon_name
        )));
    };

    let coordinates = Coordinates::new(lat, lon);
    if coordinates.validate().is_err() {
        return Err(ApiError::InvalidInput("Invalid coordinate range".to_string()));
    }

    Ok(coordinates)
}

/// Non-blank query value
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| !n.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<Coordinates, ApiError>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_valid_coordinates() {
        let coordinates = parse_coordinates(Some("13.08"), Some(" 80.27 "), "lat", "lon").unwrap();
        assert_eq!(coordinates, Coordinates::new(13.08, 80.27));
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(
            message(parse_coordinates(None, Some("80.27"), "lat", "lon")),
            "lat and lon query parameters are required"
        );
        assert_eq!(
            message(parse_coordinates(Some(""), Some("80.27"), "lat", "lon")),
            "lat and lon query parameters are required"
        );
    }

    #[test]
    fn test_non_numeric_values() {
        assert_eq!(
            message(parse_coordinates(Some("north"), Some("80.27"), "lat", "lon")),
            "lat and lon must be valid numbers"
        );
        assert_eq!(
            message(parse_coordinates(Some("NaN"), Some("80.27"), "lat", "lon")),
            "lat and lon must be valid numbers"
        );
    }

    #[test]
    fn test_out_of_range_values() {
        for (lat, lon) in [("91", "0"), ("-90.5", "0"), ("0", "180.01"), ("0", "-181"), ("inf", "0")] {
            assert_eq!(
                message(parse_coordinates(Some(lat), Some(lon), "lat", "lon")),
                "Invalid coordinate range"
            );
        }
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(parse_coordinates(Some("-90"), Some("180"), "lat", "lon").is_ok());
        assert!(parse_coordinates(Some("90"), Some("-180"), "lat", "lon").is_ok());
    }
}
