// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod attractions;
pub mod cors;
pub mod geocode;
pub mod health;
pub mod query;
pub mod route;

pub use attractions::config as attractions_config;
pub use cors::policy as cors_policy;
pub use geocode::config as geocode_config;
pub use health::config as health_config;
pub use route::config as route_config;
