//! HTTP transport module
//!
//! Provides the `Transport` seam the pagination engine talks to, and the
//! reqwest-backed `HttpClient` that implements it.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **JSON Bodies**: Responses are parsed into `serde_json::Value`

mod client;
mod rate_limit;
mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{HttpClient, HttpClientConfig, RequestConfig, RetryPolicy};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::Transport;
