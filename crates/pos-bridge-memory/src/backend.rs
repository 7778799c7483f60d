// Canned-response backend.

use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use pos_bridge_client::backend::{BackendApi, BinaryRequest, BinaryResponse};
use pos_bridge_core::Result;

/// Backend that answers every request with one canned response and records
/// what was asked.
#[derive(Debug)]
pub struct MemoryBackend {
    response: BinaryResponse,
    requests: Mutex<Vec<BinaryRequest>>,
}

impl MemoryBackend {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            response: BinaryResponse {
                status,
                body: body.into(),
            },
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Backend serving a PDF payload.
    pub fn serving_pdf(body: impl Into<Bytes>) -> Self {
        Self::new(200, body)
    }

    /// Snapshot of the received requests, in order.
    pub fn requests(&self) -> Vec<BinaryRequest> {
        self.requests
            .lock()
            .expect("memory backend lock poisoned")
            .clone()
    }
}

#[async_trait]
impl BackendApi for MemoryBackend {
    async fn get_binary(&self, request: BinaryRequest) -> Result<BinaryResponse> {
        self.requests
            .lock()
            .expect("memory backend lock poisoned")
            .push(request);
        Ok(self.response.clone())
    }
}
