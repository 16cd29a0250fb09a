//! Blocking `ureq` transport driven from the tokio blocking pool

use super::{HttpResponse, Transport};
use crate::error::TransportError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Production transport backed by a shared `ureq` agent
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Create a transport with an optional global per-request timeout
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }

    fn get_blocking(agent: &ureq::Agent, url: &str) -> Result<HttpResponse, TransportError> {
        let mut response = agent.get(url).call().map_err(|e| TransportError::Connect {
            url: redact_query(url),
            reason: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| TransportError::Body(e.to_string()))?;

        debug!("GET {} -> {} ({} bytes)", redact_query(url), status, body.len());
        Ok(HttpResponse { status, body })
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(Some(Duration::from_secs(10)))
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        let url = url.to_string();
        tokio::task::spawn_blocking(move || Self::get_blocking(&agent, &url))
            .await
            .map_err(|e| TransportError::Join(e.to_string()))?
    }
}

/// Strip the query string so session ids and login responses stay out of logs
fn redact_query(url: &str) -> String {
    match url.split_once('?') {
        Some((path, _)) => format!("{}?...", path),
        None => url.to_string(),
    }
}
