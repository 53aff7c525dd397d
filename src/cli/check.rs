//! Handlers for the `check` diagnostic commands.

use crate::adapter::binance::FuturesClient;
use crate::cli::output;
use crate::config::Settings;
use crate::error::Result;
use crate::port::OrderGateway;

/// Verify that credentials and endpoint configuration are present.
pub fn execute_config() -> Result<()> {
    output::section("Configuration");
    let settings = Settings::from_env()?;

    output::key_value("API key", format!("set ({} chars)", settings.api_key.len()));
    output::key_value(
        "API secret",
        format!("set ({} chars)", settings.api_secret.len()),
    );
    output::key_value("Endpoint", &settings.base_url);
    output::key_value("Log dir", settings.logging.dir.display());
    println!();
    output::ok("Configuration is complete");
    Ok(())
}

/// Test authenticated connectivity to the exchange.
pub async fn execute_connection() -> Result<()> {
    let settings = Settings::from_env()?;
    let client = FuturesClient::new(&settings);

    println!("Testing connection to {}...", settings.base_url);
    output::progress("Authenticated account query");
    match client.verify_connectivity().await {
        Ok(()) => {
            output::progress_done(true);
            println!();
            output::ok("Connection and credentials verified");
            Ok(())
        }
        Err(e) => {
            output::progress_done(false);
            Err(e.into())
        }
    }
}
