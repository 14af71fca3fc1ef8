// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod http_executor;
pub mod nominatim_client;
pub mod normalizer;
pub mod osrm_client;
pub mod review_client;
pub mod serpapi_client;

pub use http_executor::*;
pub use nominatim_client::*;
pub use normalizer::*;
pub use osrm_client::*;
pub use review_client::*;
pub use serpapi_client::*;
