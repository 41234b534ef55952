//! Configuration module for environment variable parsing.
//!
//! Reads all configuration from environment variables once at startup;
//! there is no hot-reload.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Hex-encoded Ed25519 public key for interaction signature verification
    pub discord_public_key: Option<String>,

    /// Discord application id, used for global command registration
    pub discord_app_id: Option<String>,

    /// Discord bot token, used for global command registration
    pub discord_bot_token: Option<String>,

    /// DigitalOcean API bearer token
    pub digital_ocean_token: Option<String>,

    /// Name of the firewall holding the Minecraft allow-list
    pub firewall_name: String,

    /// Optional username to mention when the firewall cannot be found
    pub admin_mention: Option<String>,

    /// HTTP request timeout in milliseconds for outbound API calls
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),

            discord_public_key: env::var("DISCORD_PUBLIC_KEY").ok(),

            discord_app_id: env::var("DISCORD_APP_ID").ok(),

            discord_bot_token: env::var("DISCORD_BOT_TOKEN").ok(),

            digital_ocean_token: env::var("DIGITAL_OCEAN_KEY").ok(),

            firewall_name: env::var("FIREWALL_NAME")
                .unwrap_or_else(|_| "Minecraft-Pass".to_string()),

            admin_mention: env::var("ADMIN_MENTION").ok(),

            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Process env is global; tests that touch it run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults_without_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var("PORT");
        env::remove_var("REQUEST_TIMEOUT_MS");
        env::remove_var("FIREWALL_NAME");
        let config = Config::from_env();
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout_ms, 8000);
        assert_eq!(config.firewall_name, "Minecraft-Pass");
    }

    #[test]
    fn test_firewall_name_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("FIREWALL_NAME", "Staging-Pass");
        let config = Config::from_env();
        assert_eq!(config.firewall_name, "Staging-Pass");
        env::remove_var("FIREWALL_NAME");
    }
}
