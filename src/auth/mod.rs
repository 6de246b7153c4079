//! Authentication module
//!
//! Supports: Bearer token, API key header
//!
//! Credentials are resolved once by the caller and handed to an
//! `Authenticator`, which stamps them onto every outgoing request. Nothing in
//! this module reads the environment or any other ambient store.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
