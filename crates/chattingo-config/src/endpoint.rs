//! Base API URL used by request-issuing clients.
//!
//! Deployments normally serve the UI and the backend from the same origin,
//! with the reverse proxy forwarding `/auth` and `/api`. Outside of that
//! setup the backend is expected on `localhost:8080` unless
//! `REACT_APP_API_URL` says otherwise.

use lazy_static::lazy_static;
use tracing::debug;

use crate::env::{EnvSource, SystemEnv};

/// Environment variable overriding the base API URL.
pub const API_URL_ENV: &str = "REACT_APP_API_URL";

/// Base API URL used when [`API_URL_ENV`] is unset or empty.
pub const DEFAULT_BASE_API_URL: &str = "http://localhost:8080";

lazy_static! {
    /// Process-wide base API URL, resolved from the process environment on
    /// first access and never changed afterwards.
    pub static ref BASE_API_URL: String = resolve_base_api_url(&SystemEnv);
}

/// Resolve the base API URL against `env`.
///
/// A non-empty value is returned verbatim: no trimming and no URL validation.
pub fn resolve_base_api_url(env: &impl EnvSource) -> String {
    match env.get_var(API_URL_ENV) {
        Some(url) if !url.is_empty() => {
            debug!(source = API_URL_ENV, url = %url, "Resolved base API URL");
            url
        }
        _ => {
            debug!(url = DEFAULT_BASE_API_URL, "Using default base API URL");
            DEFAULT_BASE_API_URL.to_string()
        }
    }
}

/// Shorthand for the resolved [`BASE_API_URL`].
pub fn base_api_url() -> &'static str {
    BASE_API_URL.as_str()
}
