//! Error types for Solidafy Pager
//!
//! Every fallible call in the crate returns [`Result`]. Variants are grouped
//! by who can fix them: configuration, the caller, or the upstream API.

use thiserror::Error;

/// The main error type for Solidafy Pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Caller
    // ============================================================================
    #[error("Invalid argument{}: {message}", item_suffix(.item_index))]
    InvalidArgument {
        message: String,
        item_index: Option<usize>,
    },

    // ============================================================================
    // Upstream
    // ============================================================================
    /// Connection, TLS or body read failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status other than 429
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// 429, with the server's `Retry-After` hint in seconds when it sent one
    #[error("Rate limited by upstream{}", retry_after_suffix(.retry_after_seconds))]
    RateLimited { retry_after_seconds: Option<u64> },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Response body was not JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    Other(String),
}

fn item_suffix(item_index: &Option<usize>) -> String {
    item_index
        .map(|index| format!(" [item {index}]"))
        .unwrap_or_default()
}

fn retry_after_suffix(seconds: &Option<u64>) -> String {
    seconds
        .map(|secs| format!(", retry after {secs}s"))
        .unwrap_or_default()
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Caller error with no item attached yet; see [`Error::at_item`]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            item_index: None,
        }
    }

    /// Tag an `InvalidArgument` with the index of the item that caused it.
    ///
    /// Other variants pass through unchanged.
    #[must_use]
    pub fn at_item(self, index: usize) -> Self {
        match self {
            Self::InvalidArgument { message, .. } => Self::InvalidArgument {
                message,
                item_index: Some(index),
            },
            other => other,
        }
    }

    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Whether the failure happened talking to the upstream
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_)
                | Self::HttpStatus { .. }
                | Self::RateLimited { .. }
                | Self::Timeout { .. }
                | Self::JsonParse(_)
                | Self::InvalidUrl(_)
        )
    }

    /// Whether repeating the same request may succeed.
    ///
    /// The HTTP client consults this after every failed attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited { .. } | Self::Timeout { .. } => true,
            Self::Http(e) => e.is_connect() || e.is_timeout(),
            Self::HttpStatus { status, .. } => {
                matches!(status, 500 | 502 | 503 | 504 | 520..=524)
            }
            _ => false,
        }
    }
}

/// Result type alias for Solidafy Pager
pub type Result<T> = std::result::Result<T, Error>;
