//! Print the cable modem state of a ConnectBox.
//!
//! ```sh
//! CONNECTBOX_ADDR=192.168.178.1 CONNECTBOX_PASSWORD=secret \
//!     cargo run -p connectbox --example router_status
//! ```

use std::env;

use connectbox::logging::{init_logging, is_initialized, LoggingMode};
use connectbox::models::{CmState, CmSystemInfo};
use connectbox::{Client, ClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if !is_initialized() {
        init_logging(LoggingMode::Development)?;
    }

    let address = env::var("CONNECTBOX_ADDR").unwrap_or_else(|_| "192.168.178.1".to_string());
    let username = env::var("CONNECTBOX_USER").unwrap_or_else(|_| "NULL".to_string());
    let password = env::var("CONNECTBOX_PASSWORD")?;

    let mut client = Client::with_config(&address, &username, &password, ClientConfig::from_env())?;
    client.login().await?;

    // Log out even when a getter fails; the router accepts one session at a time.
    let result = print_status(&mut client).await;
    client.logout().await?;
    result
}

async fn print_status(client: &mut Client) -> Result<(), Box<dyn std::error::Error>> {
    let info: CmSystemInfo = client.fetch().await?;
    println!("System info:\n{}", serde_json::to_string_pretty(&info)?);

    let state: CmState = client.fetch().await?;
    println!("Modem state:\n{}", serde_json::to_string_pretty(&state)?);

    Ok(())
}
