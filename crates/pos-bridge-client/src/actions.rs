// Action and event payloads exchanged with the host platform.
//
// Dispatch is one-shot and fire-and-forget; events arrive out-of-band on the
// host's update channel.

use serde::{Deserialize, Serialize};

/// Feature groups the host gates behind a permission dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureGroup {
    Scanner,
}

/// Scanner capability actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScannerAction {
    OpenCamera,
}

/// One-shot actions dispatched to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostAction {
    /// Ask the host to grant access to a feature action. The outcome arrives
    /// later as a [`HostEvent::FeaturesUpdated`].
    RequestFeature {
        group: FeatureGroup,
        action: ScannerAction,
    },
    /// Open the camera scanner. Valid once the host has granted it.
    OpenCameraScanner,
    /// Navigate the host to a URL, optionally in a new context.
    RemoteRedirect { url: String, new_context: bool },
}

/// Events published by the host on its update channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    /// Outcome of a permission dialog: which feature actions are now
    /// dispatchable.
    FeaturesUpdated(FeatureGrants),
}

/// Per-action grant flags carried by a feature update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureGrants {
    /// Whether [`HostAction::OpenCameraScanner`] may be dispatched.
    pub open_camera_scanner: bool,
}

impl FeatureGrants {
    pub fn granted() -> Self {
        Self {
            open_camera_scanner: true,
        }
    }

    pub fn denied() -> Self {
        Self::default()
    }
}
