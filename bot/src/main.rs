//! CraftGate Bot - Discord interaction webhook server.
//!
//! This binary serves the interaction endpoint:
//! - Verifies Ed25519 request signatures
//! - Dispatches slash commands
//! - Updates the DigitalOcean firewall allow-list for `add-minecraft-ip`
//!
//! Slash commands are installed separately by `craftgate-register`.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use craftgate::firewall::DoClient;
use craftgate::web::{interactions, parse_public_key, test, AppState};
use craftgate::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("bot_starting");

    // Load configuration
    let config = Config::from_env();
    info!(
        port = config.port,
        firewall_name = %config.firewall_name,
        admin_mention_configured = config.admin_mention.is_some(),
        "config_loaded"
    );

    // The signature gate is mandatory; refuse to start without a key
    let public_key = config
        .discord_public_key
        .as_deref()
        .context("DISCORD_PUBLIC_KEY is not set")?;
    let verifying_key =
        parse_public_key(public_key).context("DISCORD_PUBLIC_KEY is not a valid Ed25519 key")?;

    let do_token = config
        .digital_ocean_token
        .clone()
        .context("DIGITAL_OCEAN_KEY is not set")?;
    let do_client = DoClient::new(
        do_token,
        Duration::from_millis(config.request_timeout_ms),
    )
    .context("Failed to build DigitalOcean client")?;

    // Create application state
    let state = AppState::new(config.clone(), verifying_key, do_client);

    // Build the router
    let bot = Router::new()
        .route("/test", get(test))
        .route("/interactions", post(interactions));

    let app = Router::new()
        .nest("/bot", bot)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "bot_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("bot_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("bot_shutting_down");
}
