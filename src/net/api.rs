//! REST call to the question-answering backend.
//!
//! Client-side (csr): real HTTP via `gloo-net`.
//! Native builds: `ask` returns `ClientError::Unavailable` so pure callers
//! and tests can link without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Send failures, non-2xx statuses, and undecodable bodies each map to their
//! own `ClientError` variant for logging; the UI collapses them into one
//! message.

#![allow(clippy::unused_async)]

use super::types::{AskRequest, AskResponse};
use crate::config::ClientConfig;
use crate::error::ClientError;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Path of the question endpoint relative to the configured base URL.
pub const ASK_PATH: &str = "/ask";

fn ask_endpoint(api_url: &str) -> String {
    format!("{}{ASK_PATH}", api_url.trim_end_matches('/'))
}

/// Decode a successful `/ask` body.
///
/// # Errors
///
/// Returns `ClientError::Decode` if the body is not a valid answer payload.
pub fn parse_ask_response(body: &str) -> Result<AskResponse, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Submit a question via `POST {api_url}/ask`.
///
/// # Errors
///
/// Returns `Transport` if the request cannot be sent, `Http` for a non-2xx
/// status, and `Decode` if the body is not a valid answer payload.
pub async fn ask(config: &ClientConfig, request: &AskRequest) -> Result<AskResponse, ClientError> {
    #[cfg(feature = "csr")]
    {
        let url = ask_endpoint(&config.api_url);
        log::debug!("POST {url} top_k={}", request.top_k);
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| ClientError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ClientError::Http { status: resp.status() });
        }
        let body = resp.text().await.map_err(|e| ClientError::Decode(e.to_string()))?;
        parse_ask_response(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ask_endpoint(&config.api_url), request);
        Err(ClientError::Unavailable)
    }
}
