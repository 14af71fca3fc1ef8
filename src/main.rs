// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, upstream clients, and start HTTP server

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use route_optimizer_backend::config::Config;
use route_optimizer_backend::handlers;
use route_optimizer_backend::services::{
    HttpExecutor, NominatimClient, OsrmClient, ReqwestTransport, ReviewClient, SerpApiClient,
};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting route optimizer backend...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Shared HTTP transport with retry policy
    let transport = match ReqwestTransport::new(config.http_timeout(), &config.http_user_agent) {
        Ok(transport) => transport,
        Err(e) => {
            log::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };
    let policy = config.retry_policy();
    log::info!(
        "Upstream retry policy: {} retries, {}ms base delay",
        policy.max_attempts,
        policy.base_delay_ms
    );
    let executor = HttpExecutor::new(Arc::new(transport), policy);

    // 5. Upstream clients
    let serpapi = web::Data::new(SerpApiClient::new(
        executor.clone(),
        config.serpapi_key.clone(),
        config.serpapi_base_url.clone(),
    ));
    let nominatim = web::Data::new(NominatimClient::new(
        executor.clone(),
        config.nominatim_base_url.clone(),
        config.geocode_limit,
    ));
    let osrm = web::Data::new(OsrmClient::new(
        executor.clone(),
        config.osrm_base_url.clone(),
    ));
    let reviews = web::Data::new(ReviewClient::new(
        executor,
        config.rapidapi_key.clone(),
        config.rapidapi_host.clone(),
        config.rapidapi_base_url.clone(),
    ));

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(serpapi.clone())
            .app_data(nominatim.clone())
            .app_data(osrm.clone())
            .app_data(reviews.clone())
            // Middleware
            .wrap(handlers::cors_policy())
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::attractions_config)
            .configure(handlers::geocode_config)
            .configure(handlers::route_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
