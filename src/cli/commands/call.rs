//! Call command - send a raw switch command

use crate::cli::args::{CallArgs, DeviceArgs};
use crate::config::Config;
use crate::error::FritzResult;

/// Execute the call command
pub async fn execute(args: CallArgs, device: &DeviceArgs, config: &Config) -> FritzResult<()> {
    let mut fritz = super::connect(config, device)?;
    let body = fritz.call(&args.command, &args.ain).await?;
    println!("{}", body);
    Ok(())
}
