//! CLI command implementations

pub mod call;
pub mod config;
pub mod login;
pub mod read;

pub use call::execute as call;
pub use config::execute as config;
pub use config::init_config as config_init;
pub use login::execute as login;
pub use read::{power, temperature};

use crate::auth::Credentials;
use crate::cli::args::DeviceArgs;
use crate::client::FritzBox;
use crate::config::Config;
use crate::error::{FritzError, FritzResult};
use crate::transport::UreqTransport;
use tracing::debug;

/// Merge command-line overrides into the configured device settings
pub(crate) fn resolve_device(
    config: &Config,
    overrides: &DeviceArgs,
) -> FritzResult<(String, Credentials)> {
    let base_url = overrides
        .url
        .clone()
        .unwrap_or_else(|| config.device.base_url.clone());

    let password = overrides
        .password
        .clone()
        .or_else(|| config.device.password.clone())
        .ok_or(FritzError::PasswordMissing)?;

    let mut credentials = Credentials::new(password);
    if let Some(username) = overrides
        .username
        .clone()
        .or_else(|| config.device.username.clone())
    {
        credentials = credentials.with_username(username);
    }

    Ok((base_url, credentials))
}

/// Build a client for the configured device
pub(crate) fn connect(
    config: &Config,
    overrides: &DeviceArgs,
) -> FritzResult<FritzBox<UreqTransport>> {
    let (base_url, credentials) = resolve_device(config, overrides)?;
    debug!("Using device at {}", base_url);

    let transport = UreqTransport::new(config.device.timeout());
    Ok(FritzBox::new(base_url, credentials, transport))
}
