//! Inbound interaction payload types.
//!
//! Field names match Discord's interaction object. Only the parts of the
//! payload the dispatcher looks at are modeled; everything else is ignored
//! during deserialization.

use serde::Deserialize;
use serde_repr::Deserialize_repr;

/// Interaction type discriminant.
///
/// Discord encodes the type as an integer. Values the platform may add
/// later collapse into `Unknown`, so an otherwise well-formed payload
/// always parses and the dispatcher, not the deserializer, rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize_repr)]
#[repr(u8)]
pub enum InteractionType {
    Ping = 1,
    ApplicationCommand = 2,
    MessageComponent = 3,
    ApplicationCommandAutocomplete = 4,
    ModalSubmit = 5,
    #[serde(other)]
    Unknown = 0,
}

/// An inbound interaction event.
///
/// Transient; exists only for the duration of one request.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    /// Interaction type (ping, application command, ...)
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// Command payload; present for application commands
    #[serde(default)]
    pub data: Option<InteractionData>,
}

/// Command payload of an application-command interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionData {
    /// Invoked command name
    pub name: String,
    /// Ordered command options as entered by the user
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

/// A single name/value option of an invoked command.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    pub value: String,
}

/// The closed set of slash commands this bot answers.
///
/// Command dispatch is an exhaustive match over this enum rather than a
/// runtime string comparison, so adding or removing a command is a
/// compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/test` - replies with a greeting
    Test,
    /// `/add-minecraft-ip` - adds an IP to the Minecraft firewall allow-list
    AddMinecraftIp,
}

impl Command {
    /// Resolve a command name to a known command, or `None` if unknown.
    pub fn parse(name: &str) -> Option<Command> {
        match name {
            "test" => Some(Command::Test),
            "add-minecraft-ip" => Some(Command::AddMinecraftIp),
            _ => None,
        }
    }

    /// The wire name the command is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Test => "test",
            Command::AddMinecraftIp => "add-minecraft-ip",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ping_interaction() {
        let interaction: Interaction = serde_json::from_str(r#"{"type": 1}"#).unwrap();
        assert_eq!(interaction.kind, InteractionType::Ping);
        assert!(interaction.data.is_none());
    }

    #[test]
    fn test_parse_command_interaction() {
        let body = r#"{
            "type": 2,
            "data": {
                "name": "add-minecraft-ip",
                "options": [{"name": "ipaddress", "value": "1.2.3.4"}]
            }
        }"#;
        let interaction: Interaction = serde_json::from_str(body).unwrap();
        assert_eq!(interaction.kind, InteractionType::ApplicationCommand);
        let data = interaction.data.unwrap();
        assert_eq!(data.name, "add-minecraft-ip");
        assert_eq!(data.options[0].value, "1.2.3.4");
    }

    #[test]
    fn test_parse_interaction_ignores_extra_fields() {
        let body = r#"{
            "type": 2,
            "id": "123456",
            "application_id": "789",
            "token": "abc",
            "data": {"name": "test", "id": "42", "type": 1}
        }"#;
        let interaction: Interaction = serde_json::from_str(body).unwrap();
        assert_eq!(interaction.data.unwrap().name, "test");
    }

    #[test]
    fn test_parse_future_interaction_type() {
        // A type Discord adds later must still parse; the dispatcher
        // answers it with the unknown-type reply.
        let interaction: Interaction = serde_json::from_str(r#"{"type": 6}"#).unwrap();
        assert_eq!(interaction.kind, InteractionType::Unknown);
    }

    #[test]
    fn test_command_parse_known() {
        assert_eq!(Command::parse("test"), Some(Command::Test));
        assert_eq!(
            Command::parse("add-minecraft-ip"),
            Some(Command::AddMinecraftIp)
        );
    }

    #[test]
    fn test_command_parse_unknown() {
        assert_eq!(Command::parse("challenge"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("Test"), None);
    }

    #[test]
    fn test_command_name_round_trip() {
        for command in [Command::Test, Command::AddMinecraftIp] {
            assert_eq!(Command::parse(command.name()), Some(command));
        }
    }
}
