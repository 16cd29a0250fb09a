//! HTTP transport abstraction
//!
//! The device client only ever issues plain GET requests, so the
//! transport surface is a single method. Tests swap in a scripted
//! implementation; production uses [`UreqTransport`].

mod ureq_transport;

pub use ureq_transport::UreqTransport;

use crate::error::TransportError;
use async_trait::async_trait;

/// Raw response as seen by the protocol layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response from a status code and body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Fail with [`TransportError::Status`] unless the status is 200
    pub fn ensure_ok(self) -> Result<Self, TransportError> {
        if self.status == 200 {
            Ok(self)
        } else {
            Err(TransportError::Status(self.status))
        }
    }
}

/// Abstract HTTP GET interface
///
/// Implementations report non-200 statuses as a normal [`HttpResponse`];
/// only failures to obtain a response at all are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request against a fully built URL
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_ok_passes_200() {
        let resp = HttpResponse::new(200, "ok");
        assert_eq!(resp.ensure_ok().unwrap().body, b"ok");
    }

    #[test]
    fn ensure_ok_rejects_other_statuses() {
        for status in [204, 301, 403, 500] {
            let err = HttpResponse::new(status, "").ensure_ok().unwrap_err();
            assert!(matches!(err, TransportError::Status(s) if s == status));
        }
    }
}
