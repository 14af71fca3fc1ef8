// src/handlers/geocode.rs
// DOCUMENTATION: HTTP handler for geocoding
// PURPOSE: Resolve a place name to coordinates

use crate::errors::ApiError;
use crate::handlers::query::present;
use crate::models::{GeocodeQuery, GeocodeResponse};
use crate::services::NominatimClient;
use actix_web::{web, HttpResponse, Responder};

/// GET /api/geocode?q=..
pub async fn geocode(
    client: web::Data<NominatimClient>,
    query: web::Query<GeocodeQuery>,
) -> Result<impl Responder, ApiError> {
    let q = present(query.q.as_deref())
        .ok_or_else(|| ApiError::InvalidInput("q is required".to_string()))?;

    let results = client.search(q).await?;

    Ok(HttpResponse::Ok().json(GeocodeResponse {
        status: "ok".to_string(),
        count: results.len(),
        results,
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/geocode", web::get().to(geocode));
}
