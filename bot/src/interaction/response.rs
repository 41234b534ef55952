//! Interaction reply construction.
//!
//! Pure builders keyed by outcome; no side effects beyond composing the
//! payload. The wire shape is either `{type: 1}` (pong) or
//! `{type: 4, data: {content, mentions?}}`.

use serde::Serialize;
use serde_repr::Serialize_repr;

use crate::firewall::WhitelistOutcome;
use crate::util::random_emoji;

/// Interaction response type discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr)]
#[repr(u8)]
pub enum InteractionResponseType {
    /// ACK for a ping
    Pong = 1,
    /// Respond with a message in the originating channel
    ChannelMessageWithSource = 4,
}

/// An outbound interaction reply.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: InteractionResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

/// Message body of a channel-message reply.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseData {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<Mention>>,
}

/// A user mention attached to a reply.
#[derive(Debug, Clone, Serialize)]
pub struct Mention {
    pub username: String,
}

impl InteractionResponse {
    /// ACK reply for a ping interaction.
    pub fn pong() -> Self {
        InteractionResponse {
            kind: InteractionResponseType::Pong,
            data: None,
        }
    }

    /// Plain channel message reply.
    pub fn message(content: impl Into<String>) -> Self {
        InteractionResponse {
            kind: InteractionResponseType::ChannelMessageWithSource,
            data: Some(ResponseData {
                content: content.into(),
                mentions: None,
            }),
        }
    }

    /// Channel message reply mentioning a user.
    pub fn message_with_mention(content: impl Into<String>, username: &str) -> Self {
        InteractionResponse {
            kind: InteractionResponseType::ChannelMessageWithSource,
            data: Some(ResponseData {
                content: content.into(),
                mentions: Some(vec![Mention {
                    username: username.to_string(),
                }]),
            }),
        }
    }
}

/// Greeting reply for the `test` command.
pub fn greeting() -> InteractionResponse {
    InteractionResponse::message(format!("hello world {}", random_emoji()))
}

/// Generic reply for an unexpected failure during command handling.
///
/// Full detail goes to the server-side log, not to the channel.
pub fn whitelist_failure() -> InteractionResponse {
    InteractionResponse::message("Something went **TERRIBLY** wrong")
}

/// Reply for each outcome of the add-IP command.
///
/// The match is exhaustive so a new outcome cannot ship without a reply,
/// and the upstream-failure arm produces an error reply instead of ever
/// reaching the confirmation text.
pub fn whitelist_reply(
    outcome: &WhitelistOutcome,
    admin_mention: Option<&str>,
) -> InteractionResponse {
    match outcome {
        WhitelistOutcome::InvalidAddress(address) => {
            InteractionResponse::message(format!("IP Address `{}` is invalid", address))
        }
        WhitelistOutcome::FirewallNotFound => match admin_mention {
            Some(username) => {
                InteractionResponse::message_with_mention("Firewall was not found", username)
            }
            None => InteractionResponse::message("Firewall was not found"),
        },
        WhitelistOutcome::AlreadyWhitelisted(address) => {
            InteractionResponse::message(format!("`{}` is already whitelisted", address))
        }
        WhitelistOutcome::UpdateFailed(status) => InteractionResponse::message(format!(
            "Updating firewall has crapped out, status: {}",
            status
        )),
        WhitelistOutcome::Added(address) => {
            InteractionResponse::message(format!("Added `{}`!", address))
        }
    }
}
