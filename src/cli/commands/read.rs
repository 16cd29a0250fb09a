//! Telemetry commands - temperature and power readings

use crate::cli::args::{DeviceArgs, ReadArgs};
use crate::config::Config;
use crate::error::FritzResult;
use console::style;

/// Execute the temperature command
pub async fn temperature(args: ReadArgs, device: &DeviceArgs, config: &Config) -> FritzResult<()> {
    let mut fritz = super::connect(config, device)?;
    let celsius = fritz.temperature(&args.ain).await?;

    if args.json {
        let out = serde_json::json!({ "ain": args.ain, "temperature_c": celsius });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} {:.1} °C", style(&args.ain).dim(), celsius);
    }

    Ok(())
}

/// Execute the power command
pub async fn power(args: ReadArgs, device: &DeviceArgs, config: &Config) -> FritzResult<()> {
    let mut fritz = super::connect(config, device)?;
    let watts = fritz.power(&args.ain).await?;

    if args.json {
        let out = serde_json::json!({ "ain": args.ain, "power_w": watts });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} {:.3} W", style(&args.ain).dim(), watts);
    }

    Ok(())
}
