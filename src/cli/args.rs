//! CLI argument definitions using clap derive

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// fritzctl - FRITZ!Box smart-home client
///
/// Logs in to the device and reads values from its smart-home actors.
#[derive(Parser, Debug)]
#[command(name = "fritzctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FRITZCTL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub device: DeviceArgs,
}

/// Connection overrides for the configured device
#[derive(Args, Debug, Default, Clone)]
pub struct DeviceArgs {
    /// Device base URL (e.g. http://192.168.178.1)
    #[arg(long, global = true, env = "FRITZ_URL")]
    pub url: Option<String>,

    /// Login user (ignored by the legacy login)
    #[arg(long, global = true, env = "FRITZ_USERNAME")]
    pub username: Option<String>,

    /// Login password
    #[arg(long, global = true, env = "FRITZ_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read the temperature of an actor in °C
    Temperature(ReadArgs),

    /// Read the current power draw of a switch in W
    Power(ReadArgs),

    /// Send a raw switch command and print the device's answer
    Call(CallArgs),

    /// Log in and print the session id
    Login,

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for telemetry reads
#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// Actor identification number
    pub ain: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the call command
#[derive(Parser, Debug)]
pub struct CallArgs {
    /// Switch command name (e.g. getswitchstate)
    pub command: String,

    /// Actor identification number
    pub ain: String,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., device.base_url)
        key: String,
        /// Value to set
        value: String,
    },
}
