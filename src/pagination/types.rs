//! Pagination types
//!
//! Caller intent (`RequestOptions`), upstream pages, the merged `ListResult`,
//! and the per-walk `PaginationState`.

use crate::error::{Error, Result};
use crate::types::{json_id, JsonValue, OptionStringExt, StringMap};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Page size used when a single-page request names no positive limit
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page the upstream will serve
pub const MAX_PAGE_SIZE: u32 = 100;

/// Runaway guard for full-collection walks
pub const MAX_PAGES: u32 = 100;

/// `object` tag of every list result
pub const LIST_OBJECT: &str = "list";

/// Query parameter carrying the page size
pub const LIMIT_PARAM: &str = "limit";

// ============================================================================
// Direction & Cursor
// ============================================================================

/// Direction of a pagination walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Walk with `after`
    #[default]
    Forward,
    /// Walk with `before`
    Backward,
}

impl Direction {
    /// Query parameter this direction threads its cursor through
    pub fn param(self) -> &'static str {
        match self {
            Self::Forward => "after",
            Self::Backward => "before",
        }
    }
}

/// A caller-supplied starting position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    /// Items after this id
    After(String),
    /// Items before this id
    Before(String),
}

impl Cursor {
    /// Direction implied by this cursor
    pub fn direction(&self) -> Direction {
        match self {
            Self::After(_) => Direction::Forward,
            Self::Before(_) => Direction::Backward,
        }
    }

    /// The opaque cursor value
    pub fn value(&self) -> &str {
        match self {
            Self::After(v) | Self::Before(v) => v,
        }
    }

    /// Take the opaque cursor value
    pub fn into_value(self) -> String {
        match self {
            Self::After(v) | Self::Before(v) => v,
        }
    }
}

// ============================================================================
// Request Options
// ============================================================================

/// How much of the collection the caller wants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// One upstream page of at most `limit` items
    SinglePage {
        /// Page size; `None` or zero means the default
        limit: Option<u32>,
    },
    /// Every page until the upstream is exhausted
    FullAggregation,
}

impl Default for PageMode {
    fn default() -> Self {
        Self::SinglePage { limit: None }
    }
}

/// Caller intent for a list request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Single page or full collection
    pub mode: PageMode,
    /// Start after this id
    pub after: Option<String>,
    /// Start before this id
    pub before: Option<String>,
    /// Position of the input item this request was built for, reported on
    /// argument errors
    pub item_index: Option<usize>,
}

impl RequestOptions {
    /// Request a single page
    pub fn single_page(limit: Option<u32>) -> Self {
        Self {
            mode: PageMode::SinglePage { limit },
            ..Default::default()
        }
    }

    /// Request the whole collection
    pub fn all() -> Self {
        Self {
            mode: PageMode::FullAggregation,
            ..Default::default()
        }
    }

    /// Set the `after` cursor
    #[must_use]
    pub fn with_after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Set the `before` cursor
    #[must_use]
    pub fn with_before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Tag the request with the input item it serves
    #[must_use]
    pub fn for_item(mut self, index: usize) -> Self {
        self.item_index = Some(index);
        self
    }

    /// Whether the whole collection was requested
    pub fn is_full_aggregation(&self) -> bool {
        matches!(self.mode, PageMode::FullAggregation)
    }

    /// Resolve the starting cursor.
    ///
    /// Empty strings count as absent. Fails with `InvalidArgument` when both
    /// `after` and `before` are present, tagged with `item_index` if set.
    pub fn start_cursor(&self) -> Result<Option<Cursor>> {
        let after = self.after.clone().none_if_empty();
        let before = self.before.clone().none_if_empty();
        match (after, before) {
            (Some(_), Some(_)) => {
                let err = Error::invalid_argument(
                    "'after' and 'before' cannot be used together; pick one pagination direction",
                );
                Err(match self.item_index {
                    Some(index) => err.at_item(index),
                    None => err,
                })
            }
            (Some(after), None) => Ok(Some(Cursor::After(after))),
            (None, Some(before)) => Ok(Some(Cursor::Before(before))),
            (None, None) => Ok(None),
        }
    }
}

// ============================================================================
// Page & ListResult
// ============================================================================

/// One upstream response
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Items in upstream order
    pub items: Vec<JsonValue>,
    /// Upstream's `has_more` flag (absent means `false`)
    pub has_more: bool,
}

impl Page {
    /// Read a page out of a response body.
    ///
    /// Returns `None` when the body carries no `data` array.
    pub fn from_body(body: JsonValue) -> Option<Self> {
        let JsonValue::Object(mut map) = body else {
            return None;
        };
        let has_more = map
            .get("has_more")
            .and_then(JsonValue::as_bool)
            .unwrap_or(false);
        match map.remove("data") {
            Some(JsonValue::Array(items)) => Some(Self { items, has_more }),
            _ => None,
        }
    }

    /// Cursor for the following page: the last item's `id`
    pub fn last_cursor(&self) -> Option<String> {
        self.items
            .last()
            .and_then(|item| item.get("id"))
            .and_then(json_id)
    }

    /// Number of items on the page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Caller-facing list, identical in shape for one page or many
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResult {
    /// Always `"list"`
    pub object: String,
    /// Items in upstream order
    pub data: Vec<JsonValue>,
    /// Whether more items remain upstream
    pub has_more: bool,
}

impl ListResult {
    /// Build a list result
    pub fn new(data: Vec<JsonValue>, has_more: bool) -> Self {
        Self {
            object: LIST_OBJECT.to_string(),
            data,
            has_more,
        }
    }

    /// An empty, exhausted list
    pub fn empty() -> Self {
        Self::new(Vec::new(), false)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Page> for ListResult {
    fn from(page: Page) -> Self {
        Self::new(page.items, page.has_more)
    }
}

// ============================================================================
// Walk State
// ============================================================================

/// Why a walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Upstream reported `has_more = false`
    Exhausted,
    /// Upstream returned a page with no items
    EmptyPage,
    /// Last item had no usable `id`
    MissingCursor,
    /// The walk hit its page bound
    PageLimit,
    /// Response carried no `data` array
    MalformedPage,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Exhausted => "no more pages",
            Self::EmptyPage => "empty page",
            Self::MissingCursor => "last item has no id",
            Self::PageLimit => "page limit reached",
            Self::MalformedPage => "response has no data array",
        };
        f.write_str(reason)
    }
}

/// Result of processing one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch again with these query parameters
    Continue {
        /// Query parameters for the next request
        query_params: StringMap,
    },
    /// Stop walking
    Done(StopReason),
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Tracks one walk; never shared between walks
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Cursor for the next request
    pub cursor: Option<String>,
    /// Pages fetched so far
    pub pages_fetched: u32,
    /// Items fetched so far
    pub total_fetched: u64,
    /// Set once the walk is over
    pub stop_reason: Option<StopReason>,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state starting from a cursor
    pub fn with_cursor(cursor: Option<String>) -> Self {
        Self {
            cursor,
            ..Default::default()
        }
    }

    /// Mark the walk as complete
    pub fn mark_done(&mut self, reason: StopReason) {
        self.stop_reason = Some(reason);
    }

    /// Whether the walk is complete
    pub fn is_done(&self) -> bool {
        self.stop_reason.is_some()
    }

    /// Count a fetched page
    pub fn next_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched += count;
    }
}
