// Toast presentation against the recording notifier.

use pos_bridge_client::toast::{show_toast, ButtonRole, ToastButton, TOAST_DURATION};
use pos_bridge_memory::MemoryNotifier;

#[tokio::test]
async fn dismiss_is_the_only_default_button() {
    let notifier = MemoryNotifier::new();
    show_toast(&notifier, "Order saved", Vec::new()).await.unwrap();

    let presented = notifier.presented();
    assert_eq!(presented.len(), 1);
    assert_eq!(presented[0].message, "Order saved");
    assert_eq!(presented[0].buttons, vec![ToastButton::dismiss()]);
    assert_eq!(presented[0].duration, TOAST_DURATION);
}

#[tokio::test]
async fn extra_buttons_are_appended_after_dismiss() {
    let notifier = MemoryNotifier::new();
    let extras = vec![
        ToastButton::new("Retry", ButtonRole::Action),
        ToastButton::new("Details", ButtonRole::Action),
    ];
    show_toast(&notifier, "Sync failed", extras.clone())
        .await
        .unwrap();

    let toast = &notifier.presented()[0];
    assert_eq!(toast.buttons.len(), extras.len() + 1);
    assert_eq!(toast.buttons[0], ToastButton::dismiss());
    assert_eq!(&toast.buttons[1..], extras.as_slice());
}

#[tokio::test]
async fn concurrent_toasts_stack_without_deduplication() {
    let notifier = MemoryNotifier::new();
    show_toast(&notifier, "Same message", Vec::new()).await.unwrap();
    show_toast(&notifier, "Same message", Vec::new()).await.unwrap();

    assert_eq!(notifier.presented().len(), 2);
}
