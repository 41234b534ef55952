//! Thin DigitalOcean v2 API client.
//!
//! Covers exactly the two calls the bot needs: listing firewalls and
//! submitting a whole-object firewall update. Nothing is retried; a failure
//! is terminal for the current request.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::info;

use super::types::{Firewall, FirewallListing};

/// DigitalOcean API base URL.
const DO_API_BASE: &str = "https://api.digitalocean.com/v2";

/// Errors from the DigitalOcean client.
#[derive(Debug, Error)]
pub enum DoApiError {
    #[error("DigitalOcean request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("DigitalOcean returned status {0} listing firewalls")]
    ListFailed(u16),
}

/// DigitalOcean API client with bearer-token auth.
#[derive(Debug, Clone)]
pub struct DoClient {
    http: Client,
    base_url: String,
    token: String,
}

impl DoClient {
    /// Create a client with the given API token and request timeout.
    pub fn new(token: String, timeout: Duration) -> Result<Self, DoApiError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(DoClient {
            http,
            base_url: DO_API_BASE.to_string(),
            token,
        })
    }

    /// List up to `per_page` firewalls.
    pub async fn list_firewalls(&self, per_page: u32) -> Result<Vec<Firewall>, DoApiError> {
        let response = self
            .http
            .get(format!("{}/firewalls", self.base_url))
            .query(&[("per_page", per_page)])
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DoApiError::ListFailed(status.as_u16()));
        }

        let listing: FirewallListing = response.json().await?;

        info!(firewall_count = listing.firewalls.len(), "firewalls_listed");

        Ok(listing.firewalls)
    }

    /// Submit a whole-object firewall update.
    ///
    /// Returns the HTTP status code; a non-success status is an outcome for
    /// the caller to surface, not a transport error.
    pub async fn update_firewall(&self, firewall: &Firewall) -> Result<u16, DoApiError> {
        let response = self
            .http
            .put(format!("{}/firewalls/{}", self.base_url, firewall.id))
            .bearer_auth(&self.token)
            .json(firewall)
            .send()
            .await?;

        let status = response.status().as_u16();

        info!(
            firewall_id = %firewall.id,
            firewall_name = %firewall.name,
            status_code = status,
            "firewall_update_submitted"
        );

        Ok(status)
    }
}
