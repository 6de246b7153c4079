//! Authenticator implementation
//!
//! Applies a resolved credential to outgoing request configs.

use super::types::AuthConfig;
use crate::http::RequestConfig;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Shorthand for a bearer-token authenticator
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::new(AuthConfig::bearer(token))
    }

    /// Apply authentication to a request config
    pub fn apply(&self, request: RequestConfig) -> RequestConfig {
        match self.config.header() {
            Some((name, value)) => request.header(name, value),
            None => request,
        }
    }

    /// Get the auth config
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}
