//! HTTP client for list endpoints
//!
//! Every call is a `GET` with query parameters that answers with a JSON
//! document. Failed attempts are retried according to a [`RetryPolicy`]; the
//! decision of what is retryable lives on [`Error::is_retryable`].

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::error::{Error, Result};
use crate::types::{BackoffType, JsonValue, StringMap};
use reqwest::{header::RETRY_AFTER, Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

// ============================================================================
// Retry Policy
// ============================================================================

/// How often and how long to wait before repeating a failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Growth of the delay between attempts
    pub backoff: BackoffType,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Ceiling for every delay, including server `Retry-After` hints
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: BackoffType::Exponential,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Backoff delay after the zero-based `attempt` failed
    pub fn delay(&self, attempt: u32) -> Duration {
        let steps = match self.backoff {
            BackoffType::Constant => 1,
            BackoffType::Linear => attempt.saturating_add(1),
            BackoffType::Exponential => 1u32.checked_shl(attempt).unwrap_or(u32::MAX),
        };
        self.initial_delay.saturating_mul(steps).min(self.max_delay)
    }

    /// Delay before retrying after `error`.
    ///
    /// A `Retry-After` hint replaces the backoff delay but is still capped at
    /// `max_delay`.
    pub fn delay_for(&self, error: &Error, attempt: u32) -> Duration {
        match error {
            Error::RateLimited {
                retry_after_seconds: Some(secs),
            } => Duration::from_secs(*secs).min(self.max_delay),
            _ => self.delay(attempt),
        }
    }
}

// ============================================================================
// Client Config
// ============================================================================

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Prefix for relative request paths
    pub base_url: Option<String>,
    /// Per-attempt timeout
    pub timeout: Duration,
    pub retry: RetryPolicy,
    /// Client-side token bucket; `None` disables it
    pub rate_limit: Option<RateLimiterConfig>,
    /// Headers sent with every request
    pub default_headers: StringMap,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
            rate_limit: Some(RateLimiterConfig::default()),
            default_headers: StringMap::new(),
            user_agent: format!("solidafy-pager/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.retry.max_retries = retries;
        self
    }

    /// `None` turns client-side rate limiting off
    #[must_use]
    pub fn with_rate_limit(mut self, rate_limit: Option<RateLimiterConfig>) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

// ============================================================================
// Request Config
// ============================================================================

/// Query parameters and headers for one `GET`, plus optional overrides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    pub query: StringMap,
    pub headers: StringMap,
    /// Replaces the client timeout for this request
    pub timeout: Option<Duration>,
    /// Replaces the policy's retry count for this request
    pub max_retries: Option<u32>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Merge query parameters; later keys win
    #[must_use]
    pub fn queries(mut self, params: StringMap) -> Self {
        self.query.extend(params);
        self
    }

    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }
}

// ============================================================================
// Client
// ============================================================================

/// reqwest-backed JSON client with retries and rate limiting
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// `GET` `path` and parse the body as JSON.
    ///
    /// Retryable failures are repeated up to the policy's retry count, waiting
    /// [`RetryPolicy::delay_for`] between attempts. The last error is returned
    /// once retries run out.
    pub async fn get_json(&self, path: &str, request: RequestConfig) -> Result<JsonValue> {
        let url = self.resolve_url(path);
        let policy = &self.config.retry;
        let max_retries = request.max_retries.unwrap_or(policy.max_retries);
        let timeout = request.timeout.unwrap_or(self.config.timeout);

        let mut attempt = 0;
        loop {
            if let Some(limiter) = &self.rate_limiter {
                limiter.wait().await;
            }

            let error = match self.attempt(&url, &request, timeout).await {
                Ok(body) => {
                    debug!(url = %url, attempt, "Request succeeded");
                    return Ok(body);
                }
                Err(error) => error,
            };

            if attempt >= max_retries || !error.is_retryable() {
                return Err(error);
            }

            let delay = policy.delay_for(&error, attempt);
            warn!(
                url = %url,
                attempt = attempt + 1,
                attempts = max_retries + 1,
                ?delay,
                %error,
                "Request failed, retrying"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    /// One network round trip, classified into a body or an error
    async fn attempt(
        &self,
        url: &str,
        request: &RequestConfig,
        timeout: Duration,
    ) -> Result<JsonValue> {
        let mut builder = self.client.get(url).timeout(timeout);
        for (name, value) in self.config.default_headers.iter().chain(&request.headers) {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: timeout.as_millis() as u64,
                }
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited {
                retry_after_seconds: retry_after(&response),
            });
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16(), body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Absolute URLs pass through; anything else is joined onto `base_url`
    fn resolve_url(&self, path: &str) -> String {
        if path.contains("://") {
            return path.to_string();
        }
        match &self.config.base_url {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            None => path.to_string(),
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("rate_limited", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// `Retry-After` in whole seconds; HTTP-date values are ignored
fn retry_after(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}
