//! Network operations for querying the road status API.
//!
//! The lookup only needs "GET a URL, get back status and body". That contract
//! is the [`HttpTransport`] trait; [`UreqTransport`] is the real implementation
//! and tests substitute an in-memory one.

use crate::error::TransportError;
use async_trait::async_trait;
use std::time::Duration;
use ureq::Agent;

/// Status code and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Performs a GET. Any HTTP status is a successful exchange; only failures
    /// to obtain a response at all are errors.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// [`HttpTransport`] backed by a blocking `ureq` agent run on smol's thread pool.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// Creates a transport. `timeout` bounds the whole request when given.
    pub fn new(timeout: Option<Duration>) -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build();

        Self {
            agent: config.into(),
        }
    }
}

#[async_trait]
impl HttpTransport for UreqTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        let url = url.to_string();

        smol::unblock(move || -> Result<HttpResponse, TransportError> {
            let mut response = agent.get(&url).call()?;
            let status = response.status().as_u16();
            let body = response.body_mut().read_to_string()?;
            Ok(HttpResponse::new(status, body))
        })
        .await
    }
}

/// Builds `{base_url}/{road_name}?app_id=..&app_key=..`.
///
/// The road name is not normalized, but it is percent-encoded as a single
/// path segment so names with spaces, `#` or non-ASCII characters still reach
/// the API. If `base_url` already has a query string the credentials are
/// appended to it.
pub fn build_request_url(base_url: &str, road_name: &str, app_id: &str, app_key: &str) -> String {
    let url = format!("{}/{}", base_url, urlencoding::encode(road_name));
    let separator = if url.contains('?') { '&' } else { '?' };

    format!(
        "{}{}app_id={}&app_key={}",
        url,
        separator,
        urlencoding::encode(app_id),
        urlencoding::encode(app_key)
    )
}

/// Replaces the `app_key` value in `url` so it can be logged.
pub fn redact_app_key(url: &str) -> String {
    let Some(start) = url.find("app_key=").map(|i| i + "app_key=".len()) else {
        return url.to_string();
    };
    let end = url[start..].find('&').map_or(url.len(), |i| start + i);

    format!("{}***{}", &url[..start], &url[end..])
}
