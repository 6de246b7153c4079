//! Page fetcher
//!
//! Turns one set of pagination query parameters into one transport call.

use crate::auth::Authenticator;
use crate::error::Result;
use crate::http::{RequestConfig, Transport};
use crate::types::{JsonValue, StringMap};
use tracing::debug;

/// Issues single page requests with the credential it was built with
#[derive(Debug)]
pub struct PageFetcher<T> {
    transport: T,
    auth: Authenticator,
}

impl<T: Transport> PageFetcher<T> {
    /// Create a fetcher over `transport`, authenticating with `auth`
    pub fn new(transport: T, auth: Authenticator) -> Self {
        Self { transport, auth }
    }

    /// Fetch one page.
    ///
    /// Transport errors are returned as-is.
    pub async fn fetch(&self, url: &str, params: StringMap) -> Result<JsonValue> {
        debug!(url, ?params, "Fetching page");
        let request = self.auth.apply(RequestConfig::new().queries(params));
        self.transport.get_json(url, request).await
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
