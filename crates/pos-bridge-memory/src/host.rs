// In-memory host transport.
//
// Records every dispatched action and lets tests play the host's side of the
// permission protocol by publishing events on the update channel.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::broadcast;

use pos_bridge_client::actions::{FeatureGrants, HostAction, HostEvent};
use pos_bridge_client::bridge::{AppBridgeConfig, HostTransport};
use pos_bridge_core::{BridgeError, Result};

/// How the fake answers the token handshake.
#[derive(Debug, Clone)]
enum TokenBehavior {
    Grant(String),
    Reject(String),
    /// Never answer; pairs with a small handshake timeout in tests.
    Stall,
}

/// Recording in-memory host platform.
pub struct MemoryHost {
    events: broadcast::Sender<HostEvent>,
    dispatched: Mutex<Vec<HostAction>>,
    token: TokenBehavior,
}

impl MemoryHost {
    /// Host that grants a fixed session token.
    pub fn new() -> Self {
        Self::with_token("memory-session-token")
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self::with_behavior(TokenBehavior::Grant(token.into()))
    }

    /// Host whose token handshake is rejected.
    pub fn rejecting_handshake(reason: impl Into<String>) -> Self {
        Self::with_behavior(TokenBehavior::Reject(reason.into()))
    }

    /// Host whose token handshake never completes.
    pub fn stalled_handshake() -> Self {
        Self::with_behavior(TokenBehavior::Stall)
    }

    fn with_behavior(token: TokenBehavior) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            events,
            dispatched: Mutex::new(Vec::new()),
            token,
        }
    }

    /// Snapshot of all actions dispatched so far, in order.
    pub fn dispatched(&self) -> Vec<HostAction> {
        self.dispatched
            .lock()
            .expect("memory host lock poisoned")
            .clone()
    }

    /// Publish an event on the update channel, as the host would.
    pub fn publish(&self, event: HostEvent) {
        // No subscribers is fine; the send result is irrelevant here.
        let _ = self.events.send(event);
    }

    /// Answer the permission dialog with a camera-scanner grant.
    pub fn grant_camera_scanner(&self) {
        self.publish(HostEvent::FeaturesUpdated(FeatureGrants::granted()));
    }

    /// Answer the permission dialog without granting anything.
    pub fn deny_camera_scanner(&self) {
        self.publish(HostEvent::FeaturesUpdated(FeatureGrants::denied()));
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostTransport for MemoryHost {
    async fn fetch_session_token(&self, _config: &AppBridgeConfig) -> Result<String> {
        match &self.token {
            TokenBehavior::Grant(token) => Ok(token.clone()),
            TokenBehavior::Reject(reason) => Err(BridgeError::HostHandshakeFailed(reason.clone())),
            TokenBehavior::Stall => std::future::pending().await,
        }
    }

    fn dispatch(&self, action: HostAction) -> Result<()> {
        self.dispatched
            .lock()
            .expect("memory host lock poisoned")
            .push(action);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<HostEvent> {
        self.events.subscribe()
    }
}

impl std::fmt::Debug for MemoryHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryHost")
            .field("dispatched", &self.dispatched())
            .finish()
    }
}
