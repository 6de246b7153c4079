//! Pagination module
//!
//! Cursor pagination over `{ data: [...], has_more }` list endpoints.
//!
//! # Overview
//!
//! `RequestOptions` captures caller intent (one page or the whole collection,
//! optionally starting from an `after`/`before` cursor). `CursorPaginator`
//! turns a `PaginationState` into query parameters and decides, page by page,
//! whether a walk continues.

mod cursor;
mod types;

pub use cursor::CursorPaginator;
pub use types::{
    Cursor, Direction, ListResult, NextPage, Page, PageMode, PaginationState, RequestOptions,
    StopReason, DEFAULT_PAGE_SIZE, LIMIT_PARAM, LIST_OBJECT, MAX_PAGES, MAX_PAGE_SIZE,
};

#[cfg(test)]
mod tests;
