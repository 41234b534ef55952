//! Firewall allow-list management against the DigitalOcean API.
//!
//! ## Update flow
//!
//! ```text
//! validate IPv4 → list firewalls → plan_addition() → PUT updated firewall
//! ```
//!
//! The planning step is pure; all remote IO lives in [`client`] and the
//! orchestration in [`whitelist`].

pub mod client;
pub mod plan;
pub mod types;
pub mod whitelist;

pub use client::{DoApiError, DoClient};
pub use plan::{plan_addition, UpdatePlan};
pub use types::{Firewall, InboundRule, OutboundRule, RuleTargets};
pub use whitelist::{add_address, WhitelistOutcome};
