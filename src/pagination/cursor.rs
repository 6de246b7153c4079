//! Cursor pagination strategy
//!
//! Threads the last item's `id` back through `after` or `before`. Only the
//! active direction's parameter is ever emitted.

use super::types::{Direction, NextPage, Page, PaginationState, StopReason, LIMIT_PARAM};
use crate::types::StringMap;

/// Cursor-based pagination over `{ data, has_more }` pages
///
/// Common patterns:
/// - `?limit=100&after=em_123`
/// - `?limit=100&before=em_456`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPaginator {
    /// Items requested per page
    pub page_size: u32,
    /// Most pages a single walk may fetch
    pub max_pages: u32,
    /// Fixed for the whole walk
    pub direction: Direction,
}

impl CursorPaginator {
    /// Create a new cursor paginator
    pub fn new(page_size: u32, max_pages: u32, direction: Direction) -> Self {
        Self {
            page_size,
            max_pages,
            direction,
        }
    }

    /// Forward-only paginator
    pub fn forward(page_size: u32, max_pages: u32) -> Self {
        Self::new(page_size, max_pages, Direction::Forward)
    }

    /// Query parameters for the next request
    pub fn request_params(&self, state: &PaginationState) -> StringMap {
        let mut params = StringMap::new();
        params.insert(LIMIT_PARAM.to_string(), self.page_size.to_string());
        if let Some(cursor) = &state.cursor {
            params.insert(self.direction.param().to_string(), cursor.clone());
        }
        params
    }

    /// Record a fetched page and decide whether to fetch another.
    ///
    /// Continues only while the page reports more, is non-empty, the page
    /// bound is not reached and the last item carries an id.
    pub fn process_page(&self, page: &Page, state: &mut PaginationState) -> NextPage {
        state.next_page();
        state.add_fetched(page.len() as u64);

        let stop = if !page.has_more {
            Some(StopReason::Exhausted)
        } else if page.is_empty() {
            Some(StopReason::EmptyPage)
        } else if state.pages_fetched >= self.max_pages {
            Some(StopReason::PageLimit)
        } else {
            None
        };
        if let Some(reason) = stop {
            state.mark_done(reason);
            return NextPage::Done(reason);
        }

        match page.last_cursor() {
            Some(cursor) => {
                state.set_cursor(cursor);
                NextPage::Continue {
                    query_params: self.request_params(state),
                }
            }
            None => {
                state.mark_done(StopReason::MissingCursor);
                NextPage::Done(StopReason::MissingCursor)
            }
        }
    }
}
