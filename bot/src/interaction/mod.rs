//! Discord interaction types and reply construction.
//!
//! This module defines:
//! - The inbound interaction payload (`types`)
//! - The closed set of slash commands the bot answers (`types::Command`)
//! - Pure builders for the reply payloads (`response`)

pub mod response;
pub mod types;

pub use response::{InteractionResponse, InteractionResponseType, Mention, ResponseData};
pub use types::{Command, CommandOption, Interaction, InteractionData, InteractionType};
