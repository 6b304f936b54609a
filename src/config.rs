//! Client configuration.
//!
//! The backend URL is fixed at build time. `POLICY_ASSISTANT_API_URL` may be
//! set while compiling the WASM bundle to point at a non-local backend; there
//! is no runtime configuration surface.

use std::time::Duration;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when no build-time override is given.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Number of passages requested per question. Not user-configurable.
pub const TOP_K: u32 = 5;

/// How long the copy button shows its confirmation label.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Settings shared by every handler of a mounted client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub copy_feedback: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: resolve_api_url(option_env!("POLICY_ASSISTANT_API_URL")),
            copy_feedback: COPY_FEEDBACK,
        }
    }
}

/// Pick the backend base URL, ignoring blank overrides and trailing slashes.
pub fn resolve_api_url(override_url: Option<&str>) -> String {
    override_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_owned()
}
