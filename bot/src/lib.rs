//! CraftGate - Discord slash-command bot for a Minecraft server firewall.
//!
//! This library provides shared modules for the two CraftGate binaries:
//! - `craftgate-bot`: Web server receiving Discord interaction webhooks
//! - `craftgate-register`: One-shot installer for the global slash commands
//!
//! ## Architecture
//!
//! ```text
//! Discord → Web Server → Signature Verifier → Dispatcher → Firewall Updater → DigitalOcean
//! ```

pub mod commands;
pub mod config;
pub mod firewall;
pub mod interaction;
pub mod util;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use firewall::{DoClient, Firewall, WhitelistOutcome};
pub use interaction::{Command, Interaction, InteractionResponse};
pub use web::AppState;
