//! Scripted in-memory transport for unit tests

use super::client::RequestConfig;
use super::transport::Transport;
use crate::error::{Error, Result};
use crate::types::{JsonValue, StringMap};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;

type Responder = Box<dyn Fn(usize, &RequestConfig) -> Result<JsonValue> + Send + Sync>;

/// A request as the transport saw it
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub url: String,
    pub query: StringMap,
    pub headers: StringMap,
}

/// Transport that answers from a closure and records every call
pub(crate) struct MockTransport {
    responder: Responder,
    calls: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Answer call `n` (zero-based) with `respond(n, request)`
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(usize, &RequestConfig) -> Result<JsonValue> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Serve the given bodies in order; calls past the end fail
    pub fn pages(pages: Vec<JsonValue>) -> Self {
        Self::new(move |n, _| {
            pages
                .get(n)
                .cloned()
                .ok_or_else(|| Error::Other(format!("unexpected request #{}", n + 1)))
        })
    }

    pub fn calls(&self) -> Vec<RecordedRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_json(&self, url: &str, request: RequestConfig) -> Result<JsonValue> {
        let n = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(RecordedRequest {
                url: url.to_string(),
                query: request.query.clone(),
                headers: request.headers.clone(),
            });
            calls.len() - 1
        };
        (self.responder)(n, &request)
    }
}

/// Items `{id: "<prefix>_<i>"}` for `i` in `start..start + count`
pub(crate) fn items(prefix: &str, start: usize, count: usize) -> Vec<JsonValue> {
    (start..start + count)
        .map(|i| json!({ "id": format!("{prefix}_{i}") }))
        .collect()
}

/// Upstream page body
pub(crate) fn page(data: Vec<JsonValue>, has_more: bool) -> JsonValue {
    json!({ "object": "list", "data": data, "has_more": has_more })
}
