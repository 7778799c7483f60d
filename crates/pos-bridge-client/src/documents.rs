// Packing-slip fetch-and-redirect flow.
//
// Download the PDF under the session's bearer token, stage it as an object
// URL, then redirect the host to it in a new context. The public entry point
// is a swallow-all boundary: failures are toasted and logged, never returned.
// No retry; the object URL is not revoked here (callers hold the registry and
// can revoke once navigation is done).

use std::sync::Arc;

use tracing::{debug, error};

use pos_bridge_core::{i18n, BridgeConfig, PosSession, Result};

use crate::actions::HostAction;
use crate::backend::{BackendApi, BinaryRequest};
use crate::bridge::{AppBridge, HostTransport};
use crate::object_url::ObjectUrlRegistry;
use crate::toast::{show_toast, Notifier};

/// Backend endpoint serving packing-slip PDFs.
pub const PACKING_SLIP_PATH: &str = "/fop/apps/pdf/PrintPackingSlip";
/// Backend base URL used when callers have nothing better configured.
pub const DEFAULT_BACKEND_BASE_URL: &str = "https://dev-maarg.hotwax.io";
/// Message key shown when the flow fails.
pub const PACKING_SLIP_FAILURE_KEY: &str = "Failed to print packing slip";

/// Fallible half of the flow: fetch the packing slip for `shipment_id`,
/// stage it, and dispatch the redirect. Returns the staged object URL.
pub async fn fetch_packing_slip_url(
    session: &PosSession,
    config: &BridgeConfig,
    transport: Arc<dyn HostTransport>,
    backend: &dyn BackendApi,
    registry: &ObjectUrlRegistry,
    shipment_id: &str,
) -> Result<String> {
    let response = backend
        .get_binary(BinaryRequest {
            path: PACKING_SLIP_PATH.to_string(),
            params: vec![("shipmentId".to_string(), shipment_id.to_string())],
            bearer_token: session.token.clone(),
        })
        .await?;
    let payload = response.into_result()?;

    let pdf_url = registry.create(payload);
    debug!(shipment_id, %pdf_url, "packing slip staged");

    let bridge = AppBridge::connect(&session.shop, &session.host, config, transport).await?;
    bridge.dispatch(HostAction::RemoteRedirect {
        url: pdf_url.clone(),
        new_context: true,
    })?;

    Ok(pdf_url)
}

/// Print the packing slip for `shipment_id`.
///
/// Any failure is reported to the user via a localized toast and logged; the
/// caller never sees an error.
#[allow(clippy::too_many_arguments)]
pub async fn print_packing_slip(
    session: &PosSession,
    config: &BridgeConfig,
    transport: Arc<dyn HostTransport>,
    backend: &dyn BackendApi,
    registry: &ObjectUrlRegistry,
    notifier: &dyn Notifier,
    shipment_id: &str,
) {
    if let Err(err) =
        fetch_packing_slip_url(session, config, transport, backend, registry, shipment_id).await
    {
        error!(%err, shipment_id, "failed to load packing slip");
        let message = i18n::translate(PACKING_SLIP_FAILURE_KEY);
        if let Err(toast_err) = show_toast(notifier, &message, Vec::new()).await {
            error!(%toast_err, "failed to present packing slip failure toast");
        }
    }
}
