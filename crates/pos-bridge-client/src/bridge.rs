// Host app-bridge connection handle and session tokens.
//
// `AppBridge::connect` is async-shaped to match the calling convention of the
// operations built on top of it, but performs no I/O; the one true suspension
// point is the token handshake in `session_token`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::broadcast;

use pos_bridge_core::{BridgeConfig, BridgeError, Result};

use crate::actions::{HostAction, HostEvent};

/// Bound on the host token handshake. A stalled handshake is the host
/// platform's problem; the bound just keeps callers from hanging forever.
pub const DEFAULT_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport half of the host platform's embedding SDK.
///
/// One implementation talks to the real host; `pos-bridge-memory` provides a
/// recording fake for tests.
#[async_trait]
pub trait HostTransport: Send + Sync {
    /// Perform the session-token handshake with the host.
    async fn fetch_session_token(&self, config: &AppBridgeConfig) -> Result<String>;

    /// Dispatch a one-shot action to the host.
    fn dispatch(&self, action: HostAction) -> Result<()>;

    /// Subscribe to the host's update channel. Dropping the receiver is the
    /// unsubscribe path.
    fn subscribe(&self) -> broadcast::Receiver<HostEvent>;
}

/// Connection parameters for one (shop, host) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppBridgeConfig {
    pub api_key: String,
    pub host: String,
    pub force_redirect: bool,
}

/// Connection handle to the host platform, scoped to one (shop, host) pair.
///
/// Callers reuse the handle to avoid duplicate handshakes and discard it when
/// navigation completes; there is no teardown beyond drop.
#[derive(Clone)]
pub struct AppBridge {
    config: AppBridgeConfig,
    transport: Arc<dyn HostTransport>,
    handshake_timeout: Duration,
}

impl AppBridge {
    /// Build a connection handle for `shop` on `host`.
    ///
    /// Fails with [`BridgeError::ConfigurationMissing`] when the shop has no
    /// API key configured; any construction error is returned, never panicked.
    pub async fn connect(
        shop: &str,
        host: &str,
        config: &BridgeConfig,
        transport: Arc<dyn HostTransport>,
    ) -> Result<Self> {
        let api_key = config.api_key_for(shop)?;

        Ok(Self {
            config: AppBridgeConfig {
                api_key: api_key.to_string(),
                host: host.to_string(),
                force_redirect: true,
            },
            transport,
            handshake_timeout: DEFAULT_HANDSHAKE_TIMEOUT,
        })
    }

    /// Override the handshake bound (tests use very small values).
    pub fn with_handshake_timeout(mut self, timeout: Duration) -> Self {
        self.handshake_timeout = timeout;
        self
    }

    pub fn config(&self) -> &AppBridgeConfig {
        &self.config
    }

    /// Dispatch a one-shot action to the host.
    pub fn dispatch(&self, action: HostAction) -> Result<()> {
        self.transport.dispatch(action)
    }

    /// Subscribe to the host's update channel.
    pub fn subscribe(&self) -> broadcast::Receiver<HostEvent> {
        self.transport.subscribe()
    }

    pub(crate) async fn fetch_session_token(&self) -> Result<String> {
        match tokio::time::timeout(
            self.handshake_timeout,
            self.transport.fetch_session_token(&self.config),
        )
        .await
        {
            Ok(Ok(token)) => Ok(token),
            Ok(Err(err @ BridgeError::HostHandshakeFailed(_))) => Err(err),
            Ok(Err(err)) => Err(BridgeError::HostHandshakeFailed(err.to_string())),
            Err(_) => Err(BridgeError::HostHandshakeFailed(
                "token handshake timed out".into(),
            )),
        }
    }
}

impl std::fmt::Debug for AppBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppBridge")
            .field("config", &self.config)
            .field("handshake_timeout", &self.handshake_timeout)
            .finish()
    }
}

/// Fetch a short-lived bearer token from the host platform.
///
/// An absent handle fails immediately with [`BridgeError::InvalidConfiguration`]
/// ("Invalid App Config"); a rejected or stalled handshake becomes
/// [`BridgeError::HostHandshakeFailed`]. No retries.
pub async fn session_token(bridge: Option<&AppBridge>) -> Result<String> {
    let bridge = bridge.ok_or(BridgeError::InvalidConfiguration)?;
    bridge.fetch_session_token().await
}
