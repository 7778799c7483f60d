// Packing-slip fetch-and-redirect flow against the in-memory collaborators.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;

use pos_bridge_client::actions::HostAction;
use pos_bridge_client::documents::{
    fetch_packing_slip_url, print_packing_slip, PACKING_SLIP_PATH,
};
use pos_bridge_client::object_url::ObjectUrlRegistry;
use pos_bridge_client::toast::ToastButton;
use pos_bridge_core::config::ShopCredentials;
use pos_bridge_core::{BridgeConfig, BridgeError, PosSession};
use pos_bridge_memory::{MemoryBackend, MemoryHost, MemoryNotifier};

fn config() -> BridgeConfig {
    let mut shops = HashMap::new();
    shops.insert(
        "acme".to_string(),
        ShopCredentials {
            api_key: "key-1".into(),
        },
    );
    BridgeConfig {
        shops,
        embedded_launchpad_url: Some("https://lp.example".into()),
        login_url: Some("https://login.example/login".into()),
    }
}

fn session() -> PosSession {
    PosSession::new("acme", "h1", true, "oms-token")
}

#[tokio::test]
async fn fetch_stages_the_pdf_and_redirects() {
    let host = Arc::new(MemoryHost::new());
    let backend = MemoryBackend::serving_pdf(Bytes::from_static(b"%PDF-1.7 slip"));
    let registry = ObjectUrlRegistry::new();

    let url = fetch_packing_slip_url(
        &session(),
        &config(),
        host.clone(),
        &backend,
        &registry,
        "13099",
    )
    .await
    .unwrap();

    assert_eq!(
        registry.get(&url).unwrap(),
        Bytes::from_static(b"%PDF-1.7 slip")
    );
    assert_eq!(
        host.dispatched(),
        vec![HostAction::RemoteRedirect {
            url,
            new_context: true,
        }]
    );

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, PACKING_SLIP_PATH);
    assert_eq!(
        requests[0].params,
        vec![("shipmentId".to_string(), "13099".to_string())]
    );
    assert_eq!(requests[0].bearer_token, "oms-token");
}

#[tokio::test]
async fn non_success_status_fails_with_the_body_detail() {
    let host = Arc::new(MemoryHost::new());
    let backend = MemoryBackend::new(500, "fop renderer down");
    let registry = ObjectUrlRegistry::new();

    let err = fetch_packing_slip_url(
        &session(),
        &config(),
        host.clone(),
        &backend,
        &registry,
        "13099",
    )
    .await
    .unwrap_err();

    assert_eq!(
        err,
        BridgeError::UpstreamRequestFailed {
            status: 500,
            detail: "fop renderer down".into(),
        }
    );
    assert!(host.dispatched().is_empty());
    assert!(registry.is_empty());
}

#[tokio::test]
async fn print_failure_is_toasted_and_swallowed() {
    let host = Arc::new(MemoryHost::new());
    let backend = MemoryBackend::new(404, "no such shipment");
    let registry = ObjectUrlRegistry::new();
    let notifier = MemoryNotifier::new();

    print_packing_slip(
        &session(),
        &config(),
        host.clone(),
        &backend,
        &registry,
        &notifier,
        "99999",
    )
    .await;

    let presented = notifier.presented();
    assert_eq!(presented.len(), 1);
    assert_eq!(presented[0].message, "Failed to print packing slip");
    assert_eq!(presented[0].buttons, vec![ToastButton::dismiss()]);
    assert!(host.dispatched().is_empty());
}

#[tokio::test]
async fn print_success_shows_no_toast() {
    let host = Arc::new(MemoryHost::new());
    let backend = MemoryBackend::serving_pdf("%PDF-1.7");
    let registry = ObjectUrlRegistry::new();
    let notifier = MemoryNotifier::new();

    print_packing_slip(
        &session(),
        &config(),
        host.clone(),
        &backend,
        &registry,
        &notifier,
        "13099",
    )
    .await;

    assert!(notifier.presented().is_empty());
    assert_eq!(host.dispatched().len(), 1);
    assert_eq!(registry.len(), 1);
}

#[tokio::test]
async fn print_swallows_configuration_errors_too() {
    let host = Arc::new(MemoryHost::new());
    let backend = MemoryBackend::serving_pdf("%PDF-1.7");
    let registry = ObjectUrlRegistry::new();
    let notifier = MemoryNotifier::new();
    let unknown_shop = PosSession::new("globex", "h1", true, "oms-token");

    print_packing_slip(
        &unknown_shop,
        &config(),
        host.clone(),
        &backend,
        &registry,
        &notifier,
        "13099",
    )
    .await;

    assert_eq!(notifier.presented().len(), 1);
    assert!(host.dispatched().is_empty());
}
