//! fritzctl - FRITZ!Box smart-home client
//!
//! Logs in to the device with the legacy MD5 challenge-response scheme,
//! keeps the session id, and issues authenticated switch commands.

pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use auth::{Credentials, SessionManager, SESSION_SENTINEL};
pub use client::FritzBox;
pub use error::{AuthError, FritzError, FritzResult, RequestError, TransportError};
pub use transport::{HttpResponse, Transport, UreqTransport};
