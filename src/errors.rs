// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use crate::services::RequestError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::{json, Value};
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every upstream failure surfaces as a 500 with a message
/// telling the caller which kind of failure happened; only caller input
/// errors map to 400.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotConfigured(String),

    #[error("{provider} authentication failed. Check your API key.")]
    UpstreamAuth { provider: String },

    #[error("{provider} rate limit exceeded. Please try again later.")]
    UpstreamRateLimited { provider: String },

    #[error("{context}: {source}")]
    Upstream {
        context: String,
        #[source]
        source: RequestError,
    },

    #[error("Unexpected response from {provider}: {message}")]
    UnexpectedPayload { provider: String, message: String },
}

impl ApiError {
    /// Classify a failed upstream request
    /// DOCUMENTATION: 401/403 → auth failure, 429 → rate limited,
    /// anything else (5xx after retries, connection failure, other 4xx) →
    /// generic upstream failure
    pub fn from_upstream(provider: &str, context: &str, err: RequestError) -> Self {
        log::error!("{} request failed: {}", provider, err);
        if let Some(body) = &err.body {
            log::error!("{} error details: {}", provider, body);
        }

        match err.status.map(|status| status.as_u16()) {
            Some(401) | Some(403) => ApiError::UpstreamAuth {
                provider: provider.to_string(),
            },
            Some(429) => ApiError::UpstreamRateLimited {
                provider: provider.to_string(),
            },
            _ => ApiError::Upstream {
                context: context.to_string(),
                source: err,
            },
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotConfigured(_) => "NOT_CONFIGURED",
            ApiError::UpstreamAuth { .. } => "UPSTREAM_AUTH_FAILED",
            ApiError::UpstreamRateLimited { .. } => "UPSTREAM_RATE_LIMITED",
            ApiError::Upstream { .. } => "UPSTREAM_ERROR",
            ApiError::UnexpectedPayload { .. } => "UNEXPECTED_PAYLOAD",
        }
    }

    /// Upstream error body, forwarded to the client for diagnosis
    pub fn details(&self) -> Option<&Value> {
        match self {
            ApiError::Upstream { source, .. } => source.body.as_ref(),
            _ => None,
        }
    }
}

/// Convert ApiError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let mut error = json!({
            "code": self.code(),
            "message": self.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        if let Some(details) = self.details() {
            error["details"] = details.clone();
        }

        HttpResponse::build(self.status_code()).json(json!({ "error": error }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(status: Option<u16>) -> RequestError {
        RequestError {
            status: status.map(|code| reqwest::StatusCode::from_u16(code).unwrap()),
            message: "Request failed".to_string(),
            body: Some(json!({ "error": "Invalid API key" })),
        }
    }

    #[test]
    fn test_auth_failures() {
        for code in [401, 403] {
            let err = ApiError::from_upstream("SERPAPI", "Failed to fetch attractions", failed(Some(code)));
            assert!(matches!(err, ApiError::UpstreamAuth { .. }));
            assert_eq!(err.to_string(), "SERPAPI authentication failed. Check your API key.");
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_rate_limited() {
        let err = ApiError::from_upstream("SERPAPI", "Failed to fetch attractions", failed(Some(429)));
        assert!(matches!(err, ApiError::UpstreamRateLimited { .. }));
        assert_eq!(
            err.to_string(),
            "SERPAPI rate limit exceeded. Please try again later."
        );
    }

    #[test]
    fn test_other_failures_keep_upstream_details() {
        for status in [Some(500), Some(404), None] {
            let err = ApiError::from_upstream("OSRM", "Failed to fetch route", failed(status));
            assert!(matches!(err, ApiError::Upstream { .. }));
            assert_eq!(err.to_string(), "Failed to fetch route: Request failed");
            assert_eq!(err.details(), Some(&json!({ "error": "Invalid API key" })));
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidInput("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotConfigured("missing".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
