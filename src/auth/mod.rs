//! Authentication against the device
//!
//! Only the legacy MD5 challenge-response login is supported.

pub mod challenge;
pub mod session;

pub use session::{SessionInfo, SessionManager, SESSION_SENTINEL};

use std::fmt;

/// Login credentials, fixed for the lifetime of a client
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Accepted for configuration compatibility; the legacy login ignores it
    pub username: Option<String>,

    /// Device password
    pub password: String,
}

impl Credentials {
    /// Credentials with a password and no username
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            username: None,
            password: password.into(),
        }
    }

    /// Attach a username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
