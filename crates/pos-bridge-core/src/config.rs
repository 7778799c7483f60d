// Process configuration and logger setup.
//
// Configuration is loaded once from the environment at startup. `from_env` is
// lenient (missing keys stay `None`) so that `validate()` can report every
// problem explicitly instead of individual operations failing later with a
// lookup error.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{BridgeError, Result};

/// JSON mapping from shop name to `{"apiKey": ...}`.
pub const SHOP_CONFIG_VAR: &str = "POS_BRIDGE_SHOP_CONFIG";
/// Base URL of the embedded launchpad used by embedded logins.
pub const LAUNCHPAD_URL_VAR: &str = "POS_BRIDGE_EMBEDDED_LAUNCHPAD_URL";
/// Plain login URL used by non-embedded sessions.
pub const LOGIN_URL_VAR: &str = "POS_BRIDGE_LOGIN_URL";

/// Per-shop credentials for the host app-bridge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShopCredentials {
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

/// Static, read-only process configuration with lifecycle tied to startup.
#[derive(Debug, Clone, Default)]
pub struct BridgeConfig {
    /// Shop name → app-bridge credentials.
    pub shops: HashMap<String, ShopCredentials>,
    /// Embedded launchpad base URL.
    pub embedded_launchpad_url: Option<String>,
    /// Plain login URL for non-embedded sessions.
    pub login_url: Option<String>,
}

impl BridgeConfig {
    /// Load configuration from the environment.
    ///
    /// A malformed shop-config JSON document is an error; absent variables
    /// are not (see [`BridgeConfig::validate`]).
    pub fn from_env() -> Result<Self> {
        let shops = match std::env::var(SHOP_CONFIG_VAR) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|err| {
                BridgeError::missing(format!("{SHOP_CONFIG_VAR} is not valid JSON: {err}"))
            })?,
            Err(_) => HashMap::new(),
        };

        Ok(Self {
            shops,
            embedded_launchpad_url: std::env::var(LAUNCHPAD_URL_VAR).ok(),
            login_url: std::env::var(LOGIN_URL_VAR).ok(),
        })
    }

    /// Startup validation: every key the operations depend on must be set.
    pub fn validate(&self) -> Result<()> {
        if self.shops.is_empty() {
            return Err(BridgeError::missing(SHOP_CONFIG_VAR));
        }
        if self.embedded_launchpad_url.is_none() {
            return Err(BridgeError::missing(LAUNCHPAD_URL_VAR));
        }
        if self.login_url.is_none() {
            return Err(BridgeError::missing(LOGIN_URL_VAR));
        }
        Ok(())
    }

    /// Look up the app-bridge API key for a shop.
    pub fn api_key_for(&self, shop: &str) -> Result<&str> {
        self.shops
            .get(shop)
            .map(|credentials| credentials.api_key.as_str())
            .ok_or_else(|| BridgeError::missing(format!("no app-bridge config for shop {shop}")))
    }
}

/// Initialize the `tracing` subscriber.
///
/// Honors `RUST_LOG`; defaults to `pos_bridge=info` otherwise.
pub fn init_logger() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pos_bridge=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
