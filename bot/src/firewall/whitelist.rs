//! Orchestration of one allow-list addition.
//!
//! Strictly sequential: validate, fetch, plan, update. Nothing is retried
//! and no local state survives the request; every invocation re-fetches the
//! firewall from DigitalOcean.

use std::net::Ipv4Addr;

use tokio::sync::Mutex;
use tracing::{info, warn};

use super::client::{DoApiError, DoClient};
use super::plan::{plan_addition, UpdatePlan};

/// Listing page size; the account holds nowhere near this many firewalls.
const LIST_PER_PAGE: u32 = 100;

/// Outcome of one add-IP invocation, exactly one per request.
///
/// Every variant maps to a user-visible reply, so a non-success update
/// status cannot fall through to the confirmation path.
#[derive(Debug, Clone)]
pub enum WhitelistOutcome {
    /// The submitted string is not a well-formed IPv4 address
    InvalidAddress(String),
    /// No firewall with the configured name exists
    FirewallNotFound,
    /// The address is already present; no mutation performed
    AlreadyWhitelisted(String),
    /// The update call returned a non-success status
    UpdateFailed(u16),
    /// The address was appended and the update accepted
    Added(String),
}

/// Add `raw_address` to the allow-list of the firewall named `firewall_name`.
///
/// The fetch-check-update sequence runs under `update_lock` so two
/// concurrent invocations cannot both fetch the pre-update firewall and
/// silently drop one addition. Validation happens before the lock and
/// before any remote call.
pub async fn add_address(
    client: &DoClient,
    firewall_name: &str,
    raw_address: &str,
    update_lock: &Mutex<()>,
) -> Result<WhitelistOutcome, DoApiError> {
    let address: Ipv4Addr = match raw_address.parse() {
        Ok(address) => address,
        Err(_) => {
            warn!(address = %raw_address, "whitelist_invalid_address");
            return Ok(WhitelistOutcome::InvalidAddress(raw_address.to_string()));
        }
    };

    let _guard = update_lock.lock().await;

    let firewalls = client.list_firewalls(LIST_PER_PAGE).await?;

    match plan_addition(firewalls, firewall_name, address) {
        UpdatePlan::FirewallNotFound => {
            warn!(firewall_name = %firewall_name, "whitelist_firewall_not_found");
            Ok(WhitelistOutcome::FirewallNotFound)
        }
        UpdatePlan::AlreadyWhitelisted => {
            info!(address = %address, "whitelist_duplicate");
            Ok(WhitelistOutcome::AlreadyWhitelisted(address.to_string()))
        }
        UpdatePlan::Update(firewall) => {
            let status = client.update_firewall(&firewall).await?;

            if !(200..300).contains(&status) {
                warn!(
                    address = %address,
                    status_code = status,
                    "whitelist_update_failed"
                );
                return Ok(WhitelistOutcome::UpdateFailed(status));
            }

            info!(
                address = %address,
                firewall_name = %firewall_name,
                "whitelist_address_added"
            );
            Ok(WhitelistOutcome::Added(address.to_string()))
        }
    }
}
