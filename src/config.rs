//! Client configuration
//!
//! YAML-backed settings for the upstream endpoint, HTTP behaviour and
//! pagination bounds, plus conversions into the runtime config types.
//!
//! ```yaml
//! base_url: "https://api.example.com"
//! api_key_env: EXAMPLE_API_KEY
//! http:
//!   timeout_secs: 30
//!   max_retries: 3
//!   backoff: exponential
//!   initial_backoff_ms: 100
//!   max_backoff_ms: 60000
//!   rate_limit:
//!     requests_per_second: 2
//!     burst_size: 2
//! pagination:
//!   default_limit: 50
//!   max_page_size: 100
//!   max_pages: 100
//!   dropdown_page_size: 100
//!   dropdown_max_pages: 10
//! ```

use crate::auth::AuthConfig;
use crate::dropdown::{DropdownConfig, DROPDOWN_MAX_PAGES};
use crate::engine::EngineConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig, RetryPolicy};
use crate::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGES, MAX_PAGE_SIZE};
use crate::types::{BackoffType, OptionStringExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for API requests
    #[serde(default)]
    pub base_url: Option<String>,

    /// Inline API key; takes precedence over `api_key_env`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Pagination bounds
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            api_key_env: default_api_key_env(),
            http: HttpConfig::default(),
            pagination: PaginationConfig::default(),
        }
    }
}

fn default_api_key_env() -> String {
    "PAGER_API_KEY".to_string()
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum number of retries per request
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Retry backoff strategy
    #[serde(default)]
    pub backoff: BackoffType,

    /// Initial backoff delay in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Backoff ceiling in milliseconds
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,

    /// Client-side rate limit; omitted means unlimited
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            backoff: BackoffType::Exponential,
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            rate_limit: None,
            user_agent: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_backoff_ms() -> u64 {
    100
}

fn default_max_backoff_ms() -> u64 {
    60000
}

// ============================================================================
// Pagination Config
// ============================================================================

/// Page sizes and page bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Single-page size when the caller names none
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Page size for full-collection walks
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,

    /// Page bound for full-collection walks
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Page size for option lists
    #[serde(default = "default_max_page_size")]
    pub dropdown_page_size: u32,

    /// Page bound for option lists
    #[serde(default = "default_dropdown_max_pages")]
    pub dropdown_max_pages: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_page_size: default_max_page_size(),
            max_pages: default_max_pages(),
            dropdown_page_size: default_max_page_size(),
            dropdown_max_pages: default_dropdown_max_pages(),
        }
    }
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> u32 {
    MAX_PAGE_SIZE
}

fn default_max_pages() -> u32 {
    MAX_PAGES
}

fn default_dropdown_max_pages() -> u32 {
    DROPDOWN_MAX_PAGES
}

// ============================================================================
// Loading & Conversion
// ============================================================================

/// Load and validate a config file
pub fn load_config(path: impl AsRef<Path>) -> Result<ClientConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    ClientConfig::from_yaml_str(&content)
}

impl ClientConfig {
    /// Parse and validate YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every setting is usable.
    ///
    /// A missing `base_url` is allowed here; it may come from the command line.
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            parse_base_url(base_url)?;
        }

        let pagination = &self.pagination;
        for (field, value) in [
            ("pagination.default_limit", pagination.default_limit),
            ("pagination.max_page_size", pagination.max_page_size),
            ("pagination.max_pages", pagination.max_pages),
            ("pagination.dropdown_page_size", pagination.dropdown_page_size),
            ("pagination.dropdown_max_pages", pagination.dropdown_max_pages),
        ] {
            if value == 0 {
                return Err(Error::invalid_value(field, "must be greater than zero"));
            }
        }

        if self.http.timeout_secs == 0 {
            return Err(Error::invalid_value(
                "http.timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// The configured base URL
    pub fn base_url(&self) -> Result<&str> {
        self.base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::missing_field("base_url"))
    }

    /// Resolve the API key from `api_key` or the process environment
    pub fn resolve_api_key(&self) -> Result<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key, reading `api_key_env` through `lookup`
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        self.api_key
            .clone()
            .none_if_empty()
            .or_else(|| lookup(&self.api_key_env).none_if_empty())
            .ok_or_else(|| Error::missing_field(format!("api_key (or ${})", self.api_key_env)))
    }

    /// Bearer auth from the resolved API key
    pub fn auth_with<F>(&self, lookup: F) -> Result<AuthConfig>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        self.resolve_api_key_with(lookup).map(AuthConfig::bearer)
    }

    /// HTTP client settings
    pub fn http_client_config(&self) -> Result<HttpClientConfig> {
        let base_url = parse_base_url(self.base_url()?)?;
        let http = &self.http;

        let retry = RetryPolicy {
            max_retries: http.max_retries,
            backoff: http.backoff,
            initial_delay: Duration::from_millis(http.initial_backoff_ms),
            max_delay: Duration::from_millis(http.max_backoff_ms),
        };

        let mut config = HttpClientConfig::new()
            .with_base_url(base_url.as_str())
            .with_timeout(Duration::from_secs(http.timeout_secs))
            .with_retry(retry)
            .with_rate_limit(http.rate_limit.clone());
        if let Some(agent) = &http.user_agent {
            config = config.with_user_agent(agent);
        }
        Ok(config)
    }

    /// List engine settings
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new()
            .with_default_limit(self.pagination.default_limit)
            .with_max_page_size(self.pagination.max_page_size)
            .with_max_pages(self.pagination.max_pages)
    }

    /// Dropdown loader settings
    pub fn dropdown_config(&self) -> DropdownConfig {
        DropdownConfig {
            page_size: self.pagination.dropdown_page_size,
            max_pages: self.pagination.dropdown_max_pages,
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_value(
            "base_url",
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}
