//! fritzctl - FRITZ!Box smart-home client
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use fritzctl::cli::args::{ConfigAction, ConfigArgs};
use fritzctl::cli::{Cli, Commands};
use fritzctl::config::ConfigManager;
use fritzctl::error::FritzResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> FritzResult<()> {
    let cli = Cli::parse();

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };

    // Init must work even when the existing file no longer parses
    if let Commands::Config(ConfigArgs {
        action: Some(ConfigAction::Init { force }),
    }) = cli.command
    {
        init_logging(cli.verbose, false);
        return fritzctl::cli::commands::config_init(&config_manager, force).await;
    }

    let config = config_manager.load().await?;
    init_logging(cli.verbose, config.general.log_format == "json");

    if config_manager.path().exists() {
        debug!("Loaded config from {}", config_manager.path().display());
    } else {
        debug!(
            "Config file {} not found, using defaults",
            config_manager.path().display()
        );
    }

    let device = &cli.device;
    match cli.command {
        Commands::Temperature(args) => fritzctl::cli::commands::temperature(args, device, &config).await,
        Commands::Power(args) => fritzctl::cli::commands::power(args, device, &config).await,
        Commands::Call(args) => fritzctl::cli::commands::call(args, device, &config).await,
        Commands::Login => fritzctl::cli::commands::login(device, &config).await,
        Commands::Config(args) => {
            fritzctl::cli::commands::config(args, &config_manager, &config).await
        }
    }
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, json: bool) {
    let filter = match verbose {
        0 => EnvFilter::new("fritzctl=warn"),
        1 => EnvFilter::new("fritzctl=info"),
        _ => EnvFilter::new("fritzctl=debug"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        subscriber.json().init();
    } else {
        subscriber.without_time().init();
    }
}
