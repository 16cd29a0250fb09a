//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{FritzError, FritzResult};
use console::style;

/// Execute the config command
pub async fn execute(args: ConfigArgs, manager: &ConfigManager, config: &Config) -> FritzResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => show_path(manager),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => {
            let mut config = config.clone();
            set_value(&mut config, &key, &value)?;
            manager.save(&config).await?;
            println!("{} Set {}", style("[OK]").green(), key);
        }
    }

    Ok(())
}

fn show_config(config: &Config) -> FritzResult<()> {
    let toml = toml::to_string_pretty(&config.redacted())?;
    println!("{}", toml);
    Ok(())
}

fn show_path(manager: &ConfigManager) {
    println!("{}", manager.path().display());
}

/// Write a default config file, replacing an existing one only with `force`
pub async fn init_config(manager: &ConfigManager, force: bool) -> FritzResult<()> {
    let path = manager.path();

    if path.exists() && !force {
        return Err(FritzError::ConfigExists(path.to_path_buf()));
    }

    manager.save(&Config::default()).await?;
    println!(
        "{} Configuration initialized ({})",
        style("[OK]").green(),
        path.display()
    );

    Ok(())
}

/// Apply a dot-separated key to the config
fn set_value(config: &mut Config, key: &str, value: &str) -> FritzResult<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "log_format"] => config.general.log_format = parse_log_format(value)?,
        ["device", "base_url"] => config.device.base_url = value.to_string(),
        ["device", "username"] => config.device.username = Some(value.to_string()),
        ["device", "password"] => config.device.password = Some(value.to_string()),
        ["device", "timeout_secs"] => config.device.timeout_secs = parse_timeout(value)?,
        _ => {
            return Err(FritzError::User(format!(
                "Unknown config key: {}. Valid keys: {}",
                key,
                VALID_KEYS.join(", ")
            )));
        }
    }

    Ok(())
}

const VALID_KEYS: [&str; 5] = [
    "general.log_format",
    "device.base_url",
    "device.username",
    "device.password",
    "device.timeout_secs",
];

fn parse_log_format(value: &str) -> FritzResult<String> {
    match value {
        "text" | "json" => Ok(value.to_string()),
        _ => Err(FritzError::User(format!(
            "Invalid log format: {}. Use text/json",
            value
        ))),
    }
}

fn parse_timeout(value: &str) -> FritzResult<u64> {
    match value.parse() {
        Ok(0) => Err(FritzError::User(
            "Timeout must be at least 1 second".to_string(),
        )),
        Ok(secs) => Ok(secs),
        Err(_) => Err(FritzError::User(format!("Invalid number: {}", value))),
    }
}
