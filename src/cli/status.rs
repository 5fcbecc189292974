//! Status command handler
//!
//! Shows the configured endpoint and whether a local server is running.

use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Status command arguments
#[derive(Args)]
pub struct StatusArgs {
    /// Check if server is running (tries to connect)
    #[arg(long)]
    pub server: bool,
}

/// Run the status command
pub async fn run(args: StatusArgs) -> Result<()> {
    let config = Config::load()?;

    println!("geocenter v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Geocoding endpoint: {}", config.geocode.endpoint);
    println!("Default format:     {}", config.defaults.format);
    println!();

    if args.server {
        check_server_status(&config).await;
    }

    Ok(())
}

/// Check if the server is running
async fn check_server_status(config: &Config) {
    let url = format!("http://{}/api/status", config.server_addr());

    match reqwest::get(&url).await {
        Ok(response) => {
            if response.status().is_success() {
                println!("Server: RUNNING on {}", config.server_addr());
                if let Ok(body) = response.text().await {
                    if let Ok(status) = serde_json::from_str::<serde_json::Value>(&body) {
                        if let Some(version) = status.get("version").and_then(|v| v.as_str()) {
                            println!("  Version: {}", version);
                        }
                        if let Some(endpoint) = status.get("endpoint").and_then(|v| v.as_str()) {
                            println!("  Endpoint: {}", endpoint);
                        }
                    }
                }
            } else {
                println!("Server: ERROR (status {})", response.status());
            }
        }
        Err(_) => {
            println!("Server: NOT RUNNING on {}", config.server_addr());
        }
    }
}
