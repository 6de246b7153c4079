//! Auth configuration types

use std::fmt;

/// Authentication configuration for upstream requests
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Bearer token authentication (`Authorization: Bearer <token>`)
    Bearer {
        /// The bearer token
        token: String,
    },

    /// API key sent in a custom header
    ApiKey {
        /// Header name
        header: String,
        /// Prefix to add before the value (e.g., "Token ")
        prefix: Option<String>,
        /// The API key value
        value: String,
    },
}

impl AuthConfig {
    /// Create bearer auth
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Create API key header auth
    pub fn api_key(header: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ApiKey {
            header: header.into(),
            prefix: None,
            value: value.into(),
        }
    }

    /// Header name and value this config produces, if any
    pub fn header(&self) -> Option<(String, String)> {
        match self {
            Self::None => None,
            Self::Bearer { token } => Some(("Authorization".to_string(), format!("Bearer {token}"))),
            Self::ApiKey {
                header,
                prefix,
                value,
            } => Some((
                header.clone(),
                format!("{}{}", prefix.as_deref().unwrap_or(""), value),
            )),
        }
    }
}

// Secrets never reach logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bearer { .. } => f.debug_struct("Bearer").field("token", &"***").finish(),
            Self::ApiKey { header, prefix, .. } => f
                .debug_struct("ApiKey")
                .field("header", header)
                .field("prefix", prefix)
                .field("value", &"***")
                .finish(),
        }
    }
}
