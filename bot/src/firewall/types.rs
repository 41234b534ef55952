//! DigitalOcean firewall resource types.
//!
//! Field names match the DigitalOcean v2 API. The whole object round-trips
//! through the update call, so rules the bot never touches (outbound rules,
//! droplet ids, tags) are carried verbatim.

use serde::{Deserialize, Serialize};

/// A named remote firewall.
///
/// The bot only ever holds a transient per-request copy; DigitalOcean owns
/// the resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Firewall {
    /// Firewall id, used as the update path segment
    pub id: String,
    /// Human-assigned firewall name
    pub name: String,
    /// Inbound traffic rules; each carries the allow-list sources
    #[serde(default)]
    pub inbound_rules: Vec<InboundRule>,
    /// Outbound traffic rules, carried through updates unchanged
    #[serde(default)]
    pub outbound_rules: Vec<OutboundRule>,
    /// Droplets the firewall is assigned to
    #[serde(default)]
    pub droplet_ids: Vec<u64>,
    /// Tags the firewall is assigned to
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One inbound rule: a protocol/port pair plus permitted sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundRule {
    pub protocol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,
    pub sources: RuleTargets,
}

/// One outbound rule; never modified by the bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundRule {
    pub protocol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,
    pub destinations: RuleTargets,
}

/// Traffic sources or destinations of a rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleTargets {
    /// IPv4/IPv6 addresses and CIDR ranges
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub droplet_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_balancer_uids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Wrapper around the paginated firewall listing.
#[derive(Debug, Deserialize)]
pub struct FirewallListing {
    #[serde(default)]
    pub firewalls: Vec<Firewall>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firewall_listing_deserialization() {
        let body = r#"{
            "firewalls": [{
                "id": "fw-1",
                "name": "Minecraft-Pass",
                "status": "succeeded",
                "inbound_rules": [{
                    "protocol": "tcp",
                    "ports": "25565",
                    "sources": {"addresses": ["1.2.3.4"]}
                }],
                "outbound_rules": [{
                    "protocol": "tcp",
                    "ports": "all",
                    "destinations": {"addresses": ["0.0.0.0/0", "::/0"]}
                }],
                "droplet_ids": [42],
                "tags": []
            }]
        }"#;
        let listing: FirewallListing = serde_json::from_str(body).unwrap();
        assert_eq!(listing.firewalls.len(), 1);
        let firewall = &listing.firewalls[0];
        assert_eq!(firewall.name, "Minecraft-Pass");
        assert_eq!(firewall.inbound_rules[0].sources.addresses, vec!["1.2.3.4"]);
        assert_eq!(firewall.droplet_ids, vec![42]);
    }

    #[test]
    fn test_empty_listing() {
        let listing: FirewallListing = serde_json::from_str("{}").unwrap();
        assert!(listing.firewalls.is_empty());
    }

    #[test]
    fn test_rule_serialization_omits_empty_targets() {
        let rule = InboundRule {
            protocol: "tcp".to_string(),
            ports: Some("25565".to_string()),
            sources: RuleTargets {
                addresses: vec!["1.2.3.4".to_string()],
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "protocol": "tcp",
                "ports": "25565",
                "sources": {"addresses": ["1.2.3.4"]}
            })
        );
    }
}
