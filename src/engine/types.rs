//! Engine types
//!
//! Configuration for the list engine and the outcome of a pagination walk.

use crate::pagination::{StopReason, DEFAULT_PAGE_SIZE, MAX_PAGES, MAX_PAGE_SIZE};
use crate::types::JsonValue;

/// Configuration for list operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Page size for single-page requests without a positive limit
    pub default_limit: u32,
    /// Page size for full-collection walks
    pub max_page_size: u32,
    /// Page bound for full-collection walks
    pub max_pages: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            max_pages: MAX_PAGES,
        }
    }
}

impl EngineConfig {
    /// Create a new engine config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default single-page limit
    #[must_use]
    pub fn with_default_limit(mut self, limit: u32) -> Self {
        self.default_limit = limit;
        self
    }

    /// Set the page size used when walking the whole collection
    #[must_use]
    pub fn with_max_page_size(mut self, size: u32) -> Self {
        self.max_page_size = size;
        self
    }

    /// Set the page bound for full walks
    #[must_use]
    pub fn with_max_pages(mut self, pages: u32) -> Self {
        self.max_pages = pages;
        self
    }
}

/// Items gathered by one pagination walk
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    /// Items from every page, in the order received
    pub items: Vec<JsonValue>,
    /// Requests issued
    pub pages_fetched: u32,
    /// Why the walk ended
    pub stop_reason: StopReason,
}
