// src/services/http_executor.rs
// DOCUMENTATION: Resilient outbound HTTP executor
// PURPOSE: Run upstream requests with bounded exponential-backoff retry

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Retry configuration for upstream calls
/// DOCUMENTATION: `max_attempts` counts retries, not total tries.
/// With the default policy a request is tried at most 4 times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of retries after the initial attempt
    pub max_attempts: u32,
    /// Wait before the first retry; doubles on every further retry
    pub base_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 500,
        }
    }
}

impl RetryPolicy {
    /// Create a policy. A zero base delay is raised to 1ms.
    pub fn new(max_attempts: u32, base_delay_ms: u64) -> Self {
        Self {
            max_attempts,
            base_delay_ms: base_delay_ms.max(1),
        }
    }

    /// Wait scheduled after a retryable failure on `attempt` (1-based)
    /// DOCUMENTATION: base_delay_ms * 2^(attempt - 1), saturating at u64::MAX ms
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u64
            .checked_shl(attempt.saturating_sub(1))
            .unwrap_or(u64::MAX);
        Duration::from_millis(self.base_delay_ms.saturating_mul(factor))
    }

    /// Total time spent waiting when every attempt fails retryably
    pub fn total_backoff(&self) -> Duration {
        (1..=self.max_attempts)
            .map(|attempt| self.delay_for(attempt))
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}

/// Description of one outbound request
/// DOCUMENTATION: Immutable once built; the executor only borrows it
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Absolute URL without query string
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Append a query parameter
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a request header
    pub fn header(mut self, name: &str, value: impl ToString) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Response received from an upstream service
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    /// Parsed JSON body; non-JSON bodies are kept as a JSON string
    pub body: Value,
}

/// Failure before any response was received (connection refused, timeout, ...)
#[derive(Error, Debug, Clone)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError(err.to_string())
    }
}

/// Final failure of an executed request
/// DOCUMENTATION: `status` is None when no response was ever received
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct RequestError {
    pub status: Option<StatusCode>,
    pub message: String,
    /// Upstream error body, when one was received
    pub body: Option<Value>,
}

impl RequestError {
    fn from_response(response: UpstreamResponse) -> Self {
        let body = match response.body {
            Value::Null => None,
            other => Some(other),
        };

        Self {
            status: Some(response.status),
            message: format!(
                "Request failed with status code {}",
                response.status.as_u16()
            ),
            body,
        }
    }

    fn no_response(err: TransportError) -> Self {
        Self {
            status: None,
            message: err.0,
            body: None,
        }
    }

    /// Transient failures: no response at all, or a 5xx status
    pub fn is_retryable(&self) -> bool {
        match self.status {
            None => true,
            Some(status) => status.is_server_error(),
        }
    }
}

/// Result of a single attempt
#[derive(Debug)]
pub enum AttemptOutcome {
    Success(UpstreamResponse),
    RetryableFailure(RequestError),
    FatalFailure(RequestError),
}

/// Classify the raw result of one attempt
pub fn classify(result: Result<UpstreamResponse, TransportError>) -> AttemptOutcome {
    match result {
        Ok(response) if response.status.is_success() => AttemptOutcome::Success(response),
        Ok(response) => {
            let error = RequestError::from_response(response);
            if error.is_retryable() {
                AttemptOutcome::RetryableFailure(error)
            } else {
                AttemptOutcome::FatalFailure(error)
            }
        }
        Err(err) => AttemptOutcome::RetryableFailure(RequestError::no_response(err)),
    }
}

/// Performs a single attempt of a request
/// DOCUMENTATION: Implementations return Ok for every response received,
/// whatever its status and even when its body cannot be read; Err only when
/// no response arrived. Final failures are logged at `error` by the caller
/// that maps them, so the retry loop stays below that level.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RequestDescriptor) -> Result<UpstreamResponse, TransportError>;
}

/// reqwest-backed transport
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with its own pooled client
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &RequestDescriptor) -> Result<UpstreamResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .query(&request.query);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status();
        // A status has arrived, so a broken body must not look like "no response"
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                log::warn!(
                    "{} {} body unreadable ({}): {}",
                    request.method,
                    request.url,
                    status,
                    err
                );
                String::new()
            }
        };

        Ok(UpstreamResponse {
            status,
            body: parse_body(&text),
        })
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Run `request` through `transport`, retrying transient failures per `policy`
/// DOCUMENTATION: Attempts are numbered from 1. After a retryable failure on
/// attempt k (k <= max_attempts) the task sleeps `policy.delay_for(k)` and
/// tries again. Fatal failures and the failure of attempt max_attempts + 1
/// are returned as-is.
pub async fn execute<T>(
    transport: &T,
    request: &RequestDescriptor,
    policy: &RetryPolicy,
) -> Result<UpstreamResponse, RequestError>
where
    T: Transport + ?Sized,
{
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;

        match classify(transport.send(request).await) {
            AttemptOutcome::Success(response) => {
                log::debug!(
                    "{} {} succeeded on attempt {} ({})",
                    request.method,
                    request.url,
                    attempt,
                    response.status
                );
                return Ok(response);
            }
            AttemptOutcome::FatalFailure(error) => {
                log::debug!("{} {} failed: {}", request.method, request.url, error);
                return Err(error);
            }
            AttemptOutcome::RetryableFailure(error) => {
                if attempt > policy.max_attempts {
                    log::warn!(
                        "{} {} failed after {} attempts: {}",
                        request.method,
                        request.url,
                        attempt,
                        error
                    );
                    return Err(error);
                }

                let wait = policy.delay_for(attempt);
                log::warn!(
                    "{} {} attempt {} failed ({}), retrying in {}ms",
                    request.method,
                    request.url,
                    attempt,
                    error,
                    wait.as_millis()
                );
                tokio::time::sleep(wait).await;
            }
        }
    }
}

/// Shared executor handed to every upstream client
#[derive(Clone)]
pub struct HttpExecutor {
    transport: Arc<dyn Transport>,
    policy: RetryPolicy,
}

impl HttpExecutor {
    pub fn new(transport: Arc<dyn Transport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub async fn execute(&self, request: &RequestDescriptor) -> Result<UpstreamResponse, RequestError> {
        execute(self.transport.as_ref(), request, &self.policy).await
    }
}
