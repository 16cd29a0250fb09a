//! Error types for fritzctl
//!
//! The protocol layers each have their own error enum so callers can tell
//! a dead network from a confused device from a rejected command. The
//! binary wraps them all in [`FritzError`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for top-level fritzctl operations
pub type FritzResult<T> = Result<T, FritzError>;

/// Failure to get a usable HTTP response out of the device
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to reach {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("Expected HTTP status 200, but got: {0}")]
    Status(u16),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Transport task failed: {0}")]
    Join(String),
}

/// Failure while establishing a session
#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Malformed session info: {0}")]
    Protocol(String),
}

/// Failure of an authenticated device command
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Device rejected command {command} for AIN {ain}")]
    InvalidValue { command: String, ain: String },

    #[error("Unexpected value for {command}: {value:?}")]
    Parse { command: String, value: String },
}

/// All errors surfaced by the fritzctl binary
#[derive(Error, Debug)]
pub enum FritzError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Configuration file already exists: {0}")]
    ConfigExists(PathBuf),

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No device password configured")]
    PasswordMissing,

    // Device errors
    #[error("Login rejected by {0}")]
    AuthRejected(String),

    #[error(transparent)]
    Request(#[from] RequestError),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl From<AuthError> for FritzError {
    fn from(err: AuthError) -> Self {
        Self::Request(RequestError::Auth(err))
    }
}

impl FritzError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::PasswordMissing => {
                Some("Pass --password, set FRITZ_PASSWORD, or add it to the [device] config section")
            }
            Self::AuthRejected(_) => Some("Check the password. The device may also block logins for a while after failures"),
            Self::ConfigExists(_) => Some("Use --force to overwrite it"),
            Self::Request(RequestError::InvalidValue { .. }) => {
                Some("Check the AIN; it must match a device known to the box")
            }
            Self::Request(RequestError::Auth(AuthError::Transport(_)))
            | Self::Request(RequestError::Transport(_)) => {
                Some("Check --url and that the device is reachable")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TransportError::Status(403);
        assert_eq!(err.to_string(), "Expected HTTP status 200, but got: 403");
    }

    #[test]
    fn auth_error_keeps_transport_message() {
        let err = AuthError::from(TransportError::Status(500));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn error_hint() {
        assert!(FritzError::PasswordMissing.hint().is_some());
        let err = FritzError::Request(RequestError::InvalidValue {
            command: "gettemperature".to_string(),
            ain: "087610000434".to_string(),
        });
        assert!(err.hint().unwrap().contains("AIN"));
    }

    #[test]
    fn auth_error_converts_to_request_error() {
        let err = FritzError::from(AuthError::Protocol("missing SID".to_string()));
        assert!(matches!(
            err,
            FritzError::Request(RequestError::Auth(AuthError::Protocol(_)))
        ));
    }
}
