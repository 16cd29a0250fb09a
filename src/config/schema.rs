//! Configuration schema for fritzctl
//!
//! Configuration is stored at `~/.config/fritzctl/config.toml`

use crate::client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Device connection settings
    pub device: DeviceConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Device connection settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Base URL of the device
    pub base_url: String,

    /// Login user; ignored by the legacy login
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Login password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Per-request timeout in seconds; 0 disables the timeout
    pub timeout_secs: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: None,
            password: None,
            timeout_secs: 10,
        }
    }
}

impl fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl DeviceConfig {
    /// Request timeout, or `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Config {
    /// Copy of this config that is safe to print
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.device.password.is_some() {
            config.device.password = Some("********".to_string());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[general]"));
        assert!(toml.contains("[device]"));
        assert!(toml.contains("http://fritz.box"));
        assert!(!toml.contains("password"));
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [device]
            password = "geheim"
            "#,
        )
        .unwrap();
        assert_eq!(config.device.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.device.timeout_secs, 10);
        assert_eq!(config.device.password.as_deref(), Some("geheim"));
        assert_eq!(config.general.log_format, "text");
    }

    #[test]
    fn zero_timeout_means_no_timeout() {
        let mut device = DeviceConfig::default();
        assert_eq!(device.timeout(), Some(Duration::from_secs(10)));

        device.timeout_secs = 0;
        assert_eq!(device.timeout(), None);
    }

    #[test]
    fn redacted_hides_password() {
        let mut config = Config::default();
        config.device.password = Some("geheim".to_string());

        let shown = toml::to_string_pretty(&config.redacted()).unwrap();
        assert!(!shown.contains("geheim"));
        assert!(!format!("{:?}", config).contains("geheim"));
    }
}
