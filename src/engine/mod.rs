//! List engine module
//!
//! Single-page fetches and full-collection walks over a cursor-paginated
//! endpoint.
//!
//! # Overview
//!
//! - `PageFetcher` - one authenticated request per page
//! - `ListEngine` - `fetch_list` plus the shared `collect` walk
//! - `EngineConfig` - page sizes and the runaway page bound
//!
//! Pages are fetched strictly one after another. Every call owns its own
//! `PaginationState`, so a single engine can serve concurrent callers.

mod fetcher;
mod types;

pub use fetcher::PageFetcher;
pub use types::{Collection, EngineConfig};

use crate::error::Result;
use crate::http::Transport;
use crate::pagination::{
    Cursor, CursorPaginator, Direction, ListResult, NextPage, Page, PageMode, PaginationState,
    RequestOptions, StopReason,
};
use tracing::{debug, info, warn};

/// Orchestrates page fetches for list endpoints
#[derive(Debug)]
pub struct ListEngine<T> {
    fetcher: PageFetcher<T>,
    config: EngineConfig,
}

impl<T: Transport> ListEngine<T> {
    /// Create a new engine with default configuration
    pub fn new(fetcher: PageFetcher<T>) -> Self {
        Self {
            fetcher,
            config: EngineConfig::default(),
        }
    }

    /// Set engine configuration
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the page fetcher
    pub fn fetcher(&self) -> &PageFetcher<T> {
        &self.fetcher
    }

    /// List items at `url`.
    ///
    /// A single-page request returns at most `limit` items and the upstream
    /// `has_more`. A full aggregation walks every page and always reports
    /// `has_more = false`. Supplying both `after` and `before` fails before
    /// any request is made. Transport errors abort the call; nothing gathered
    /// so far is returned.
    pub async fn fetch_list(&self, url: &str, options: &RequestOptions) -> Result<ListResult> {
        let start = options.start_cursor()?;

        match options.mode {
            PageMode::SinglePage { limit } => self.fetch_page(url, limit, start).await,
            PageMode::FullAggregation => {
                let direction = start.as_ref().map_or(Direction::Forward, Cursor::direction);
                let paginator =
                    CursorPaginator::new(self.config.max_page_size, self.config.max_pages, direction);
                let collection = self
                    .collect(url, &paginator, start.map(Cursor::into_value))
                    .await?;

                info!(
                    url,
                    items = collection.items.len(),
                    pages = collection.pages_fetched,
                    reason = %collection.stop_reason,
                    "Collected list"
                );
                Ok(ListResult::new(collection.items, false))
            }
        }
    }

    /// Fetch exactly one page, truncated to `limit` items
    async fn fetch_page(
        &self,
        url: &str,
        limit: Option<u32>,
        start: Option<Cursor>,
    ) -> Result<ListResult> {
        let limit = limit
            .filter(|limit| *limit > 0)
            .unwrap_or(self.config.default_limit);
        let direction = start.as_ref().map_or(Direction::Forward, Cursor::direction);
        let paginator = CursorPaginator::new(limit, 1, direction);
        let state = PaginationState::with_cursor(start.map(Cursor::into_value));

        let body = self
            .fetcher
            .fetch(url, paginator.request_params(&state))
            .await?;

        let Some(mut page) = Page::from_body(body) else {
            warn!(url, "Response has no data array, returning empty list");
            return Ok(ListResult::empty());
        };

        if page.len() > limit as usize {
            debug!(url, received = page.len(), limit, "Truncating over-long page");
            page.items.truncate(limit as usize);
        }
        Ok(page.into())
    }

    /// Walk pages with `paginator`, starting at `start`, until it stops.
    ///
    /// Items are appended in the order received. A response without a `data`
    /// array ends the walk with whatever was gathered so far.
    pub async fn collect(
        &self,
        url: &str,
        paginator: &CursorPaginator,
        start: Option<String>,
    ) -> Result<Collection> {
        let mut state = PaginationState::with_cursor(start);
        let mut params = paginator.request_params(&state);
        let mut items = Vec::new();

        let stop_reason = loop {
            let body = self.fetcher.fetch(url, params).await?;

            let Some(page) = Page::from_body(body) else {
                state.next_page();
                warn!(
                    url,
                    page = state.pages_fetched,
                    "Response has no data array, stopping pagination"
                );
                break StopReason::MalformedPage;
            };

            let next = paginator.process_page(&page, &mut state);
            debug!(
                url,
                page = state.pages_fetched,
                received = page.len(),
                total = state.total_fetched,
                "Fetched page"
            );
            items.extend(page.items);

            match next {
                NextPage::Continue { query_params } => params = query_params,
                NextPage::Done(StopReason::PageLimit) => {
                    warn!(
                        url,
                        max_pages = paginator.max_pages,
                        "Page limit reached while upstream still reports more items"
                    );
                    break StopReason::PageLimit;
                }
                NextPage::Done(reason) => break reason,
            }
        };

        Ok(Collection {
            items,
            pages_fetched: state.pages_fetched,
            stop_reason,
        })
    }
}
