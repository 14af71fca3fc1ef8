// src/handlers/cors.rs
// DOCUMENTATION: Cross-origin policy
// PURPOSE: Let the browser frontend call the API from its own dev-server origin

use actix_cors::Cors;
use actix_web::http::Method;

/// Permissive CORS: any origin, common methods, any request header
/// DOCUMENTATION: Answers with a wildcard `Access-Control-Allow-Origin`
/// and handles preflight OPTIONS requests before routing.
pub fn policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec![
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_any_header()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_rt::test]
    async fn test_simple_request_gets_wildcard_origin() {
        let app = test::init_service(
            App::new()
                .wrap(policy())
                .route("/ping", web::post().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/ping")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
