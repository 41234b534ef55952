//! CraftGate Register - one-shot global slash-command installer.
//!
//! Pushes the static command definitions to Discord's global-command
//! endpoint. Run once at deployment/setup time; the bot itself never
//! touches command registration.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use craftgate::commands::global_commands;
use craftgate::Config;

/// Discord API base URL.
const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

#[tokio::main]
async fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    let config = Config::from_env();

    let app_id = config
        .discord_app_id
        .as_deref()
        .context("DISCORD_APP_ID is not set")?;
    let bot_token = config
        .discord_bot_token
        .as_deref()
        .context("DISCORD_BOT_TOKEN is not set")?;

    let commands = global_commands();
    info!(command_count = commands.len(), "registering_global_commands");

    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(config.request_timeout_ms))
        .build()
        .context("Failed to build HTTP client")?;

    // Bulk overwrite: commands absent from the body are removed
    let response = http
        .put(format!(
            "{}/applications/{}/commands",
            DISCORD_API_BASE, app_id
        ))
        .header("Authorization", format!("Bot {}", bot_token))
        .json(&commands)
        .send()
        .await
        .context("Command registration request failed")?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("command registration failed: status {}, body {}", status, body);
    }

    info!(status_code = status.as_u16(), "global_commands_registered");

    Ok(())
}
