// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::ref_option)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # Solidafy Pager
//!
//! Client-side pagination for cursor-paginated list endpoints that answer
//! with `{ "data": [...], "has_more": bool }`.
//!
//! ## Features
//!
//! - **Single page or whole collection**: one call, one `ListResult` shape
//! - **Forward and backward walks**: `after` / `before` cursors
//! - **Runaway protection**: page bounds stop walks against misbehaving APIs
//! - **Dropdown options**: `{name, value}` pairs for interactive pickers
//! - **Retrying transport**: backoff and client-side rate limiting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solidafy_pager::auth::Authenticator;
//! use solidafy_pager::engine::{ListEngine, PageFetcher};
//! use solidafy_pager::http::{HttpClient, HttpClientConfig};
//! use solidafy_pager::pagination::RequestOptions;
//!
//! #[tokio::main]
//! async fn main() -> solidafy_pager::Result<()> {
//!     let client = HttpClient::with_config(
//!         HttpClientConfig::new().with_base_url("https://api.example.com"),
//!     )?;
//!     let engine = ListEngine::new(PageFetcher::new(client, Authenticator::bearer("re_123")));
//!
//!     let page = engine.fetch_list("/domains", &RequestOptions::single_page(Some(10))).await?;
//!     let all = engine.fetch_list("/domains", &RequestOptions::all()).await?;
//!     println!("{} of {}", page.len(), all.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! DropdownLoader ──▶ ListEngine ──▶ PageFetcher ──▶ Transport
//!  {name, value}     fetch_list     + Authenticator  (HttpClient: retry,
//!                        │                            backoff, rate limit)
//!                        ▼
//!                 CursorPaginator
//!        after/before, has_more, page bound
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Credential injection
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// Cursor pagination
pub mod pagination;

/// List engine
pub mod engine;

/// Dropdown option loading
pub mod dropdown;

/// Request field helpers
pub mod fields;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_config, ClientConfig};
pub use dropdown::{DropdownLoader, DropdownOption};
pub use engine::{ListEngine, PageFetcher};
pub use pagination::{ListResult, RequestOptions};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
