//! Session lifecycle against the device's `login_sid.lua` endpoint

use crate::auth::challenge;
use crate::auth::Credentials;
use crate::error::AuthError;
use crate::transport::Transport;
use serde::{Deserialize, Deserializer};
use tracing::{debug, info, warn};

/// Session id the device reports when no session is active
pub const SESSION_SENTINEL: &str = "0000000000000000";

/// Path of the session-info endpoint
pub const LOGIN_PATH: &str = "/login_sid.lua";

/// Session state as reported by the device
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionInfo {
    /// Current session id, or [`SESSION_SENTINEL`]
    #[serde(rename = "SID")]
    pub sid: String,

    /// Nonce for the next login attempt
    #[serde(rename = "Challenge")]
    pub challenge: String,

    /// Seconds the device refuses logins after failed attempts
    #[serde(rename = "BlockTime", default, deserialize_with = "lenient_seconds")]
    pub block_time: u64,
}

/// Read a seconds count, treating empty or garbled text as zero
fn lenient_seconds<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(0))
}

impl SessionInfo {
    /// Parse a session-info response body
    pub fn parse(body: &[u8]) -> Result<Self, AuthError> {
        let text = std::str::from_utf8(body)
            .map_err(|e| AuthError::Protocol(format!("body is not UTF-8: {}", e)))?;

        let info: SessionInfo =
            quick_xml::de::from_str(text).map_err(|e| AuthError::Protocol(e.to_string()))?;

        if info.sid.len() != SESSION_SENTINEL.len()
            || !info.sid.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(AuthError::Protocol(format!(
                "SID is not a 16-digit hex token: {:?}",
                info.sid
            )));
        }

        Ok(info)
    }

    /// Whether this response says no session is active
    pub fn is_sentinel(&self) -> bool {
        self.sid == SESSION_SENTINEL
    }
}

/// Owns the session id of one client and performs the login handshake
pub struct SessionManager {
    base_url: String,
    credentials: Credentials,
    sid: String,
}

impl SessionManager {
    /// Create a manager with no session
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            sid: String::new(),
        }
    }

    /// Current session id; empty before the first successful exchange
    pub fn session_id(&self) -> &str {
        &self.sid
    }

    /// Whether the last exchange left a real session in place
    pub fn is_authenticated(&self) -> bool {
        !self.sid.is_empty() && self.sid != SESSION_SENTINEL
    }

    /// Device base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make sure the device will accept the stored session id
    ///
    /// Asks the device about the current session first. A non-sentinel
    /// answer is adopted as-is, even if it differs from the id that was
    /// sent. Otherwise the challenge is solved and exactly one login is
    /// attempted; its result is stored even when it is the sentinel, which
    /// is how the device signals rejected credentials. Check
    /// [`is_authenticated`](Self::is_authenticated) to tell the two apart.
    ///
    /// On error the stored session id is left untouched.
    pub async fn ensure_session(&mut self, transport: &dyn Transport) -> Result<(), AuthError> {
        let url = format!(
            "{}{}?sid={}",
            self.base_url,
            LOGIN_PATH,
            urlencoding::encode(&self.sid)
        );
        let info = Self::fetch(transport, &url).await?;

        if !info.is_sentinel() {
            // Not verified against our credentials; the device vouches for it.
            debug!("Session still valid");
            self.sid = info.sid;
            return Ok(());
        }

        if info.block_time > 0 {
            warn!(
                "Device reports login block time of {}s, attempt may be refused",
                info.block_time
            );
        }

        debug!("No active session, answering challenge");
        let response = challenge::solve(&info.challenge, &self.credentials.password);
        let url = format!(
            "{}{}?response={}",
            self.base_url,
            LOGIN_PATH,
            urlencoding::encode(&response)
        );
        let login = Self::fetch(transport, &url).await?;

        if login.is_sentinel() {
            warn!("Login rejected by {}", self.base_url);
        } else {
            info!("Logged in to {}", self.base_url);
        }
        self.sid = login.sid;
        Ok(())
    }

    async fn fetch(transport: &dyn Transport, url: &str) -> Result<SessionInfo, AuthError> {
        let response = transport.get(url).await?.ensure_ok()?;
        SessionInfo::parse(&response.body)
    }
}
