//! Pure planning for an allow-list addition.
//!
//! Given a fetched firewall listing and a validated address, decide what to
//! do without performing any IO. The orchestrator in [`super::whitelist`]
//! executes the plan.

use std::net::Ipv4Addr;

use super::types::Firewall;

/// Decision for one allow-list addition.
#[derive(Debug, Clone)]
pub enum UpdatePlan {
    /// No firewall with the configured name exists
    FirewallNotFound,
    /// The address already appears in an inbound rule; nothing to mutate
    AlreadyWhitelisted,
    /// Submit this modified firewall, address appended to every inbound rule
    Update(Firewall),
}

/// Plan the addition of `address` to the firewall named `firewall_name`.
///
/// The address is appended to the source list of every inbound rule, not a
/// single targeted one: the firewall holds one rule per forwarded port and
/// a whitelisted player must pass all of them.
pub fn plan_addition(
    firewalls: Vec<Firewall>,
    firewall_name: &str,
    address: Ipv4Addr,
) -> UpdatePlan {
    let mut firewall = match firewalls.into_iter().find(|f| f.name == firewall_name) {
        Some(firewall) => firewall,
        None => return UpdatePlan::FirewallNotFound,
    };

    let address = address.to_string();

    if is_whitelisted(&firewall, &address) {
        return UpdatePlan::AlreadyWhitelisted;
    }

    for rule in &mut firewall.inbound_rules {
        rule.sources.addresses.push(address.clone());
    }

    UpdatePlan::Update(firewall)
}

/// Whether the address already appears in any inbound rule's source list.
pub fn is_whitelisted(firewall: &Firewall, address: &str) -> bool {
    firewall
        .inbound_rules
        .iter()
        .any(|rule| rule.sources.addresses.iter().any(|a| a == address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firewall::types::{InboundRule, RuleTargets};

    fn firewall(name: &str, rules: &[&[&str]]) -> Firewall {
        Firewall {
            id: "fw-1".to_string(),
            name: name.to_string(),
            inbound_rules: rules
                .iter()
                .map(|addresses| InboundRule {
                    protocol: "tcp".to_string(),
                    ports: Some("25565".to_string()),
                    sources: RuleTargets {
                        addresses: addresses.iter().map(|a| a.to_string()).collect(),
                        ..Default::default()
                    },
                })
                .collect(),
            outbound_rules: vec![],
            droplet_ids: vec![],
            tags: vec![],
        }
    }

    fn ip(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    #[test]
    fn test_plan_not_found() {
        let firewalls = vec![firewall("Other-Firewall", &[&[]])];
        assert!(matches!(
            plan_addition(firewalls, "Minecraft-Pass", ip("1.2.3.4")),
            UpdatePlan::FirewallNotFound
        ));
    }

    #[test]
    fn test_plan_not_found_on_empty_listing() {
        assert!(matches!(
            plan_addition(vec![], "Minecraft-Pass", ip("1.2.3.4")),
            UpdatePlan::FirewallNotFound
        ));
    }

    #[test]
    fn test_plan_duplicate_in_any_rule() {
        // Address present in the second rule only
        let firewalls = vec![firewall("Minecraft-Pass", &[&["9.9.9.9"], &["1.2.3.4"]])];
        assert!(matches!(
            plan_addition(firewalls, "Minecraft-Pass", ip("1.2.3.4")),
            UpdatePlan::AlreadyWhitelisted
        ));
    }

    #[test]
    fn test_plan_appends_to_every_rule() {
        let firewalls = vec![firewall(
            "Minecraft-Pass",
            &[&["9.9.9.9"], &[], &["8.8.8.8", "7.7.7.7"]],
        )];
        let plan = plan_addition(firewalls, "Minecraft-Pass", ip("1.2.3.4"));

        let updated = match plan {
            UpdatePlan::Update(firewall) => firewall,
            other => panic!("expected update plan, got {:?}", other),
        };

        assert_eq!(updated.inbound_rules.len(), 3);
        for rule in &updated.inbound_rules {
            assert_eq!(rule.sources.addresses.last().unwrap(), "1.2.3.4");
        }
        // Existing entries untouched
        assert_eq!(updated.inbound_rules[0].sources.addresses, vec!["9.9.9.9", "1.2.3.4"]);
    }

    #[test]
    fn test_plan_picks_firewall_by_name() {
        let firewalls = vec![
            firewall("Other-Firewall", &[&["1.2.3.4"]]),
            firewall("Minecraft-Pass", &[&[]]),
        ];
        // Duplicate in the other firewall must not block the addition
        assert!(matches!(
            plan_addition(firewalls, "Minecraft-Pass", ip("1.2.3.4")),
            UpdatePlan::Update(_)
        ));
    }

    #[test]
    fn test_sequential_plans_are_idempotent() {
        let firewalls = vec![firewall("Minecraft-Pass", &[&["9.9.9.9"], &[]])];
        let updated = match plan_addition(firewalls, "Minecraft-Pass", ip("1.2.3.4")) {
            UpdatePlan::Update(firewall) => firewall,
            other => panic!("expected update plan, got {:?}", other),
        };

        // Re-planning against the post-update state finds the duplicate
        assert!(matches!(
            plan_addition(vec![updated], "Minecraft-Pass", ip("1.2.3.4")),
            UpdatePlan::AlreadyWhitelisted
        ));
    }

    #[test]
    fn test_is_whitelisted() {
        let fw = firewall("Minecraft-Pass", &[&["1.2.3.4"]]);
        assert!(is_whitelisted(&fw, "1.2.3.4"));
        assert!(!is_whitelisted(&fw, "1.2.3.5"));
    }
}
