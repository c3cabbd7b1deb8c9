//! HTTP transport used by remote providers.
//!
//! The transport is chosen once per run by [`select_transport`] and shared by
//! every provider in the registry, so request code never branches on which
//! HTTP client is in use.

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::{BoxError, LlmError};

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON POST and returns the raw response.
///
/// Any non-2xx status is a successful transport call; only connection, DNS,
/// TLS and timeout problems are errors here.
pub trait HttpTransport: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    fn post_json(
        &self,
        url: &str,
        bearer_token: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, BoxError>;
}

/// [`HttpTransport`] backed by a blocking `reqwest` client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("nscm/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    fn post_json(
        &self,
        url: &str,
        bearer_token: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, BoxError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(bearer_token)
            .json(body)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

/// Build the transport for this run.
pub fn select_transport(config: &Config) -> Result<Arc<dyn HttpTransport>, LlmError> {
    let transport = ReqwestTransport::new(config.timeout).map_err(|e| LlmError::Transport {
        transport: "reqwest",
        source: Box::new(e),
    })?;
    debug!(
        "Using {} transport with {}s timeout",
        transport.name(),
        config.timeout.as_secs()
    );
    Ok(Arc::new(transport))
}
