//! # pos-bridge-client
//!
//! Integration flows for a retail POS companion app embedded in a commerce
//! host platform: the app-bridge connection handle and session tokens, toast
//! presentation, the scanner activation flow, and the packing-slip
//! fetch-and-redirect flow.
//!
//! Every external collaborator sits behind a trait ([`bridge::HostTransport`],
//! [`toast::Notifier`], [`backend::BackendApi`]) so flows can run against the
//! real host platform, an HTTP backend, or the in-memory fakes from
//! `pos-bridge-memory`.

pub mod actions;
pub mod backend;
pub mod bridge;
pub mod documents;
pub mod object_url;
pub mod scanner;
pub mod toast;

pub use actions::{FeatureGrants, FeatureGroup, HostAction, HostEvent, ScannerAction};
pub use backend::{BackendApi, BinaryRequest, BinaryResponse, HttpBackend};
pub use bridge::{session_token, AppBridge, AppBridgeConfig, HostTransport};
pub use documents::{fetch_packing_slip_url, print_packing_slip};
pub use object_url::ObjectUrlRegistry;
pub use scanner::{activate_scanner, open_scanner, ScannerActivation, ScannerState};
pub use toast::{show_toast, ButtonRole, Notifier, Toast, ToastButton, ToastPosition};
