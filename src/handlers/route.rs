// src/handlers/route.rs
// DOCUMENTATION: HTTP handlers under /api/route
// PURPOSE: Driving directions, place reviews and the frontend connectivity ping

use crate::errors::ApiError;
use crate::handlers::query::{parse_coordinates, present};
use crate::models::{DirectionsQuery, ReviewQuery};
use crate::services::{OsrmClient, ReviewClient};
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /api/route/directions?start_lat=..&start_lon=..&end_lat=..&end_lon=..
pub async fn directions(
    client: web::Data<OsrmClient>,
    query: web::Query<DirectionsQuery>,
) -> Result<impl Responder, ApiError> {
    let start = parse_coordinates(
        query.start_lat.as_deref(),
        query.start_lon.as_deref(),
        "start_lat",
        "start_lon",
    )?;
    let end = parse_coordinates(
        query.end_lat.as_deref(),
        query.end_lon.as_deref(),
        "end_lat",
        "end_lon",
    )?;

    let route = client.driving_route(start.into(), end.into()).await?;

    Ok(HttpResponse::Ok().json(json!({ "status": "ok", "route": route })))
}

/// GET /api/route/review?review_id=..
pub async fn review(
    client: web::Data<ReviewClient>,
    query: web::Query<ReviewQuery>,
) -> Result<impl Responder, ApiError> {
    let review_id = present(query.review_id.as_deref())
        .ok_or_else(|| ApiError::InvalidInput("review_id is required".to_string()))?;

    let data = client.review(review_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "status": "ok", "data": data })))
}

/// POST /api/route/get
/// Connectivity ping used by the frontend
pub async fn ping() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "message": "Backend Connected Successfully"
    }))
}

/// Configuration for /api/route
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/route")
            .route("/directions", web::get().to(directions))
            .route("/review", web::get().to(review))
            .route("/get", web::post().to(ping)),
    );
}
