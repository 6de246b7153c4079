//! Transport abstraction
//!
//! One `GET` returning a parsed JSON document. Errors are transport errors and
//! callers propagate them untouched.

use super::client::{HttpClient, RequestConfig};
use crate::error::Result;
use crate::types::JsonValue;
use async_trait::async_trait;
use std::sync::Arc;

/// Performs a single network call and returns the parsed JSON body
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a `GET` to `url` with the given query parameters and headers
    async fn get_json(&self, url: &str, request: RequestConfig) -> Result<JsonValue>;
}

#[async_trait]
impl Transport for HttpClient {
    async fn get_json(&self, url: &str, request: RequestConfig) -> Result<JsonValue> {
        HttpClient::get_json(self, url, request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get_json(&self, url: &str, request: RequestConfig) -> Result<JsonValue> {
        (**self).get_json(url, request).await
    }
}
