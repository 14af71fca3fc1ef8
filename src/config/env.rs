// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use crate::services::RetryPolicy;
use dotenv::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 5000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// SerpAPI key used for attraction lookups
    pub serpapi_key: String,

    /// SerpAPI base URL
    pub serpapi_base_url: String,

    /// RapidAPI key and host for the maps-data review API
    pub rapidapi_key: String,
    pub rapidapi_host: String,

    /// RapidAPI maps-data base URL
    pub rapidapi_base_url: String,

    /// Nominatim base URL (geocoding)
    pub nominatim_base_url: String,

    /// OSRM base URL (driving routes)
    pub osrm_base_url: String,

    /// Maximum geocoding results per query
    pub geocode_limit: u32,

    /// User-Agent sent upstream (Nominatim rejects anonymous clients)
    pub http_user_agent: String,

    /// Per-attempt request timeout in seconds
    pub http_timeout_secs: u64,

    /// Retries after the first attempt of an upstream call
    pub retry_max_attempts: u32,

    /// Backoff before the first retry, doubled per retry
    pub retry_base_delay_ms: u64,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = RetryPolicy::default();

        Config {
            server_address: var_or("SERVER_ADDRESS", "127.0.0.1"),
            server_port: parsed_or("SERVER_PORT", 5000),
            environment: var_or("ENVIRONMENT", "development"),
            log_level: var_or("LOG_LEVEL", "info"),

            serpapi_key: var_or("SERPAPI_KEY", ""),
            serpapi_base_url: var_or("SERPAPI_BASE_URL", "https://serpapi.com"),

            rapidapi_key: var_or("RAPIDAPI_KEY", ""),
            rapidapi_host: var_or("RAPIDAPI_HOST", "maps-data.p.rapidapi.com"),
            rapidapi_base_url: var_or("RAPIDAPI_BASE_URL", "https://maps-data.p.rapidapi.com"),

            nominatim_base_url: var_or(
                "NOMINATIM_BASE_URL",
                "https://nominatim.openstreetmap.org",
            ),
            osrm_base_url: var_or("OSRM_BASE_URL", "https://router.project-osrm.org"),
            geocode_limit: parsed_or("GEOCODE_LIMIT", 5),

            http_user_agent: var_or(
                "HTTP_USER_AGENT",
                concat!("route-optimizer-backend/", env!("CARGO_PKG_VERSION")),
            ),
            http_timeout_secs: parsed_or("HTTP_TIMEOUT_SECS", 15),

            retry_max_attempts: parsed_or("RETRY_MAX_ATTEMPTS", defaults.max_attempts),
            retry_base_delay_ms: parsed_or("RETRY_BASE_DELAY_MS", defaults.base_delay_ms),
        }
    }

    /// Retry policy applied to every upstream call
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retry_max_attempts, self.retry_base_delay_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.retry_base_delay_ms == 0 {
            return Err("RETRY_BASE_DELAY_MS must be greater than zero".to_string());
        }

        if self.http_timeout_secs == 0 {
            return Err("HTTP_TIMEOUT_SECS must be greater than zero".to_string());
        }

        if self.geocode_limit == 0 {
            return Err("GEOCODE_LIMIT must be greater than zero".to_string());
        }

        if self.serpapi_key.is_empty() {
            log::warn!("SERPAPI_KEY not configured - attractions will not work");
        }

        if self.rapidapi_key.is_empty() {
            log::warn!("RAPIDAPI_KEY not configured - reviews will not work");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 5000,
            environment: "test".to_string(),
            log_level: "info".to_string(),
            serpapi_key: "key".to_string(),
            serpapi_base_url: "https://serpapi.com".to_string(),
            rapidapi_key: String::new(),
            rapidapi_host: "maps-data.p.rapidapi.com".to_string(),
            rapidapi_base_url: "https://maps-data.p.rapidapi.com".to_string(),
            nominatim_base_url: "https://nominatim.openstreetmap.org".to_string(),
            osrm_base_url: "https://router.project-osrm.org".to_string(),
            geocode_limit: 5,
            http_user_agent: "test".to_string(),
            http_timeout_secs: 15,
            retry_max_attempts: 3,
            retry_base_delay_ms: 500,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
        assert_eq!(config().retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn test_zero_delay_rejected() {
        let mut config = config();
        config.retry_base_delay_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = config();
        config.http_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
