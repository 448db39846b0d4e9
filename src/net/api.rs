//! REST client for the activities API.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs returning `ApiError::Transport`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Status and body
//! interpretation lives in pure functions (`parse_roster`, `parse_message`)
//! so the mapping from HTTP outcome to error kind is testable without a
//! browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use std::fmt::Display;

use super::types::Roster;
#[cfg(any(test, feature = "csr"))]
use super::types::{ErrorBody, MessageBody};
use crate::config::BoardConfig;

/// Failure of a REST call, as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No usable response: network failure or an unparsable success body.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server returned status {status}")]
    Server { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Human-readable detail supplied by the server, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Server { detail, .. } => detail.as_deref(),
            Self::Transport(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// The three calls the activity board makes.
///
/// `signup` and `unregister` resolve to the server's `message` text, which
/// may be absent.
#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    async fn fetch_activities(&self) -> Result<Roster, ApiError>;
    async fn signup(&self, activity: &str, email: &str) -> Result<Option<String>, ApiError>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<Option<String>, ApiError>;
}

// =============================================================================
// ENDPOINTS
// =============================================================================

#[cfg(any(test, feature = "csr"))]
pub(crate) fn activities_endpoint(base: &str) -> String {
    format!("{base}/activities")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn signup_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn participants_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/participants?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

// =============================================================================
// RESPONSE INTERPRETATION
// =============================================================================

#[cfg(any(test, feature = "csr"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "csr"))]
fn transport(err: impl Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Map a non-2xx response to `ApiError::Server`. The body need not be JSON.
#[cfg(any(test, feature = "csr"))]
fn server_error(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.detail_text());
    ApiError::Server { status, detail }
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn parse_roster(status: u16, body: &str) -> Result<Roster, ApiError> {
    if !is_success(status) {
        return Err(server_error(status, body));
    }
    serde_json::from_str(body).map_err(transport)
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn parse_message(status: u16, body: &str) -> Result<Option<String>, ApiError> {
    if !is_success(status) {
        return Err(server_error(status, body));
    }
    let parsed: MessageBody = serde_json::from_str(body).map_err(transport)?;
    Ok(parsed.message)
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

/// `ActivityApi` over `fetch`, rooted at `BoardConfig::api_base`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    base: String,
}

impl HttpApi {
    pub fn new(config: &BoardConfig) -> Self {
        Self { base: config.api_base.clone() }
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}

impl ActivityApi for HttpApi {
    async fn fetch_activities(&self) -> Result<Roster, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&activities_endpoint(&self.base))
                .cache(web_sys::RequestCache::NoStore)
                .send()
                .await
                .map_err(transport)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport)?;
            parse_roster(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<Option<String>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = signup_endpoint(&self.base, activity, email);
            let resp = gloo_net::http::Request::post(&url).send().await.map_err(transport)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport)?;
            parse_message(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (activity, email);
            Err(unavailable())
        }
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Option<String>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = participants_endpoint(&self.base, activity, email);
            let resp = gloo_net::http::Request::delete(&url).send().await.map_err(transport)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport)?;
            parse_message(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (activity, email);
            Err(unavailable())
        }
    }
}
