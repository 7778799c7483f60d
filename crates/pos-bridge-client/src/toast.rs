// Toast presentation.
//
// The notification collaborator owns the overlay stack; this module only
// assembles the toast. Concurrent toasts may stack, no de-duplication.

use std::time::Duration;

use async_trait::async_trait;

use pos_bridge_core::Result;

/// Fixed display duration.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Screen position of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPosition {
    Top,
    Middle,
    #[default]
    Bottom,
}

/// Semantics of a toast button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    /// Dismisses the toast.
    Cancel,
    /// Caller-defined action.
    Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastButton {
    pub text: String,
    pub role: ButtonRole,
}

impl ToastButton {
    pub fn new(text: impl Into<String>, role: ButtonRole) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }

    /// The always-present leading button.
    pub fn dismiss() -> Self {
        Self::new("Dismiss", ButtonRole::Cancel)
    }
}

/// A dismissible, auto-expiring notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub duration: Duration,
    pub position: ToastPosition,
    pub buttons: Vec<ToastButton>,
}

impl Toast {
    /// Assemble a toast: Dismiss first, then any extra buttons.
    pub fn new(message: impl Into<String>, extra_buttons: Vec<ToastButton>) -> Self {
        let mut buttons = vec![ToastButton::dismiss()];
        buttons.extend(extra_buttons);

        Self {
            message: message.into(),
            duration: TOAST_DURATION,
            position: ToastPosition::default(),
            buttons,
        }
    }
}

/// Notification collaborator: presents a toast on the global overlay stack.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Resolves once the toast is presented, not once it is dismissed.
    async fn present(&self, toast: Toast) -> Result<()>;
}

/// Show a toast with the standard Dismiss button plus `extra_buttons`.
pub async fn show_toast(
    notifier: &dyn Notifier,
    message: &str,
    extra_buttons: Vec<ToastButton>,
) -> Result<()> {
    notifier.present(Toast::new(message, extra_buttons)).await
}
