//! Login command - run the handshake and show the session id

use crate::cli::args::DeviceArgs;
use crate::config::Config;
use crate::error::{FritzError, FritzResult};
use console::style;

/// Execute the login command
pub async fn execute(device: &DeviceArgs, config: &Config) -> FritzResult<()> {
    let mut fritz = super::connect(config, device)?;
    let sid = fritz.login().await?.to_string();

    // The device answers a bad password with the sentinel, not an error
    if !fritz.session().is_authenticated() {
        return Err(FritzError::AuthRejected(
            fritz.session().base_url().to_string(),
        ));
    }

    println!("{} {}", style("Session:").green().bold(), sid);
    Ok(())
}
