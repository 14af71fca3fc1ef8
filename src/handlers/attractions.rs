// src/handlers/attractions.rs
// DOCUMENTATION: HTTP handlers for attraction lookups
// PURPOSE: Validate coordinates, call SerpAPI, return canonical places

use crate::errors::ApiError;
use crate::handlers::query::parse_coordinates;
use crate::models::{AttractionsQuery, AttractionsResponse};
use crate::services::SerpApiClient;
use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};

/// GET /api/attractions?lat=..&lon=..
/// Tourist attractions around a point
pub async fn get_attractions(
    client: web::Data<SerpApiClient>,
    query: web::Query<AttractionsQuery>,
) -> Result<impl Responder, ApiError> {
    let point = parse_coordinates(query.lat.as_deref(), query.lon.as_deref(), "lat", "lon")?;

    let attractions = client.fetch_attractions(point).await?;

    if attractions.is_empty() {
        log::info!(
            "No attractions found for coordinates: {}, {}",
            point.lat,
            point.lon
        );
        return Ok(HttpResponse::Ok().json(AttractionsResponse::empty()));
    }

    Ok(HttpResponse::Ok().json(AttractionsResponse::found(attractions)))
}

/// GET /api/test-serp
/// Verify the SerpAPI key and connectivity
pub async fn test_serp(client: web::Data<SerpApiClient>) -> impl Responder {
    match client.test_connection().await {
        Ok(report) if report.has_results => {
            log::info!("SERPAPI CONNECTED SUCCESSFULLY");
            HttpResponse::Ok().json(json!({
                "status": "SUCCESS",
                "message": "SERPAPI CONNECTED SUCCESSFULLY",
                "testQuery": report.test_query,
                "hasResults": true
            }))
        }
        Ok(report) => {
            log::warn!("SERPAPI FAILED - Invalid response structure");
            HttpResponse::InternalServerError().json(json!({
                "status": "FAILED",
                "message": "SERPAPI FAILED - Invalid response structure",
                "response": report.body
            }))
        }
        Err(err) => {
            let mut body = match &err {
                ApiError::NotConfigured(msg) => json!({
                    "message": msg,
                    "error": "Please set SERPAPI_KEY=your_actual_key in backend/.env"
                }),
                ApiError::UpstreamAuth { .. } => json!({
                    "message": "SERPAPI FAILED - Authentication error. Check your API key.",
                    "error": err.to_string()
                }),
                ApiError::UpstreamRateLimited { .. } => json!({
                    "message": "SERPAPI FAILED - Rate limit exceeded",
                    "error": err.to_string()
                }),
                _ => json!({
                    "message": "SERPAPI FAILED",
                    "error": err.to_string(),
                    "details": err
                        .details()
                        .cloned()
                        .unwrap_or_else(|| Value::String(format!("{:?}", err)))
                }),
            };
            log::warn!("{}", body["message"].as_str().unwrap_or("SERPAPI FAILED"));

            body["status"] = json!("FAILED");
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// Configuration for attraction routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/attractions", web::get().to(get_attractions))
        .route("/api/test-serp", web::get().to(test_serp));
}
