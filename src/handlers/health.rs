// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Simple endpoints to verify service status

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn root() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("AI Route Optimizer Agent Backend Running")
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "route-optimizer-backend",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check));
}
