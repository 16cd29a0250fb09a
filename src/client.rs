//! Authenticated command client for the smart-home HTTP interface

use crate::auth::{Credentials, SessionManager};
use crate::error::RequestError;
use crate::transport::Transport;
use tracing::debug;

/// Default address of the device on a home network
pub const DEFAULT_BASE_URL: &str = "http://fritz.box";

/// Path of the smart-home command endpoint
pub const COMMAND_PATH: &str = "/webservices/homeautoswitch.lua";

/// Body the device returns for an unknown AIN or unsupported command
const INVALID_VALUE: &str = "inval";

/// Client for one device
///
/// Holds its own session; use one instance per device and do not share an
/// instance between concurrent tasks without a lock.
pub struct FritzBox<T: Transport> {
    transport: T,
    session: SessionManager,
}

impl<T: Transport> FritzBox<T> {
    /// Create a client; no request is made until the first command
    pub fn new(base_url: impl Into<String>, credentials: Credentials, transport: T) -> Self {
        Self {
            transport,
            session: SessionManager::new(base_url, credentials),
        }
    }

    /// Session state of this client
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Run the login handshake without issuing a command
    pub async fn login(&mut self) -> Result<&str, RequestError> {
        self.session.ensure_session(&self.transport).await?;
        Ok(self.session.session_id())
    }

    /// Issue a command for an actor and return the trimmed response body
    pub async fn call(&mut self, command: &str, ain: &str) -> Result<String, RequestError> {
        self.session.ensure_session(&self.transport).await?;

        let url = format!(
            "{}{}?sid={}&ain={}&switchcmd={}",
            self.session.base_url(),
            COMMAND_PATH,
            urlencoding::encode(self.session.session_id()),
            urlencoding::encode(ain),
            urlencoding::encode(command)
        );

        let response = self.transport.get(&url).await?.ensure_ok()?;

        let body = String::from_utf8(response.body).map_err(|e| RequestError::Parse {
            command: command.to_string(),
            value: String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })?;
        let body = body.trim().to_string();
        if body == INVALID_VALUE {
            return Err(RequestError::InvalidValue {
                command: command.to_string(),
                ain: ain.to_string(),
            });
        }

        debug!("{} for {} returned {:?}", command, ain, body);
        Ok(body)
    }

    /// Temperature reported by an actor, in degrees Celsius
    pub async fn temperature(&mut self, ain: &str) -> Result<f64, RequestError> {
        let tenths = self.call_numeric("gettemperature", ain).await?;
        Ok(tenths * 0.1)
    }

    /// Current power draw of a switch, in watts
    pub async fn power(&mut self, ain: &str) -> Result<f64, RequestError> {
        let milliwatts = self.call_numeric("getswitchpower", ain).await?;
        Ok(milliwatts * 0.001)
    }

    async fn call_numeric(&mut self, command: &str, ain: &str) -> Result<f64, RequestError> {
        let body = self.call(command, ain).await?;
        body.parse::<f64>().map_err(|_| RequestError::Parse {
            command: command.to_string(),
            value: body,
        })
    }
}
