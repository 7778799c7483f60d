// Recording notifier.

use std::sync::Mutex;

use async_trait::async_trait;

use pos_bridge_client::toast::{Notifier, Toast};
use pos_bridge_core::Result;

/// Notifier that records every presented toast instead of rendering it.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    presented: Mutex<Vec<Toast>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the presented toasts, in presentation order.
    pub fn presented(&self) -> Vec<Toast> {
        self.presented
            .lock()
            .expect("memory notifier lock poisoned")
            .clone()
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn present(&self, toast: Toast) -> Result<()> {
        self.presented
            .lock()
            .expect("memory notifier lock poisoned")
            .push(toast);
        Ok(())
    }
}
