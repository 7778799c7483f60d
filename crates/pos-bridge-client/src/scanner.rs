// Scanner activation flow.
//
// Requesting → AwaitingPermission → Dispatched | Denied. The access request
// returns immediately; the host's grant arrives out-of-band on the update
// channel. The permission listener is owned by the returned activation
// handle: dropping or cancelling it ends the subscription, `detach` leaves
// the listener running until the host connection goes away.

use std::sync::Arc;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error};

use pos_bridge_core::{BridgeConfig, PosSession, Result};

use crate::actions::{FeatureGroup, HostAction, HostEvent, ScannerAction};
use crate::bridge::{AppBridge, HostTransport};

/// Lifecycle of one scanner activation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerState {
    /// The access request is being prepared.
    Requesting,
    /// The request was dispatched; waiting for the permission outcome.
    AwaitingPermission,
    /// The camera scanner was granted and the open action dispatched.
    Dispatched,
    /// The host answered without granting the camera scanner.
    Denied,
}

impl ScannerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Dispatched | Self::Denied)
    }
}

/// Handle owning the permission listener of one activation attempt.
pub struct ScannerActivation {
    state: watch::Receiver<ScannerState>,
    listener: Option<JoinHandle<()>>,
}

impl ScannerActivation {
    /// Current flow state.
    pub fn state(&self) -> ScannerState {
        *self.state.borrow()
    }

    /// Wait for the terminal state of this attempt.
    pub async fn outcome(&mut self) -> ScannerState {
        loop {
            let state = *self.state.borrow_and_update();
            if state.is_terminal() {
                return state;
            }
            if self.state.changed().await.is_err() {
                return *self.state.borrow();
            }
        }
    }

    /// Stop listening for the permission outcome.
    pub fn cancel(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
        }
    }

    /// Leave the listener running for the lifetime of the host connection.
    pub fn detach(mut self) {
        self.listener.take();
    }
}

impl Drop for ScannerActivation {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for ScannerActivation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScannerActivation")
            .field("state", &self.state())
            .field("detached", &self.listener.is_none())
            .finish()
    }
}

/// Request scanner access and open the camera scanner once granted.
///
/// Subscribes to the update channel before dispatching the request so a fast
/// grant cannot be missed, then resolves the outcome on a background task.
/// Returns as soon as the request is dispatched.
pub async fn activate_scanner(
    session: &PosSession,
    config: &BridgeConfig,
    transport: Arc<dyn HostTransport>,
) -> Result<ScannerActivation> {
    let (state_tx, state_rx) = watch::channel(ScannerState::Requesting);

    let bridge = AppBridge::connect(&session.shop, &session.host, config, transport).await?;
    let mut events = bridge.subscribe();

    bridge.dispatch(HostAction::RequestFeature {
        group: FeatureGroup::Scanner,
        action: ScannerAction::OpenCamera,
    })?;
    let _ = state_tx.send(ScannerState::AwaitingPermission);
    debug!(shop = %session.shop, "scanner access requested");

    let listener = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(HostEvent::FeaturesUpdated(grants)) => {
                    if grants.open_camera_scanner {
                        if let Err(err) = bridge.dispatch(HostAction::OpenCameraScanner) {
                            error!(%err, "failed to open camera scanner");
                        }
                        let _ = state_tx.send(ScannerState::Dispatched);
                    } else {
                        debug!("camera scanner not granted");
                        let _ = state_tx.send(ScannerState::Denied);
                    }
                    break;
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(skipped, "scanner listener lagged behind host events");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    Ok(ScannerActivation {
        state: state_rx,
        listener: Some(listener),
    })
}

/// Swallow-all boundary for UI callers: every internal failure is logged and
/// swallowed, the caller never sees an error. Use [`activate_scanner`] when
/// the outcome matters.
pub async fn open_scanner(
    session: &PosSession,
    config: &BridgeConfig,
    transport: Arc<dyn HostTransport>,
) -> Option<ScannerActivation> {
    match activate_scanner(session, config, transport).await {
        Ok(activation) => Some(activation),
        Err(err) => {
            error!(%err, "scanner activation failed");
            None
        }
    }
}
