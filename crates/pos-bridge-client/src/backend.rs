// Backend API collaborator.
//
// The flows only need one shape of request: an authenticated GET returning a
// binary body. `HttpBackend` is the reqwest implementation;
// `pos-bridge-memory` ships a canned-response fake.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use pos_bridge_core::{BridgeError, Result};

/// Request for a binary document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryRequest {
    /// Path below the backend base URL.
    pub path: String,
    /// Query parameters.
    pub params: Vec<(String, String)>,
    /// Bearer token for the `Authorization` header.
    pub bearer_token: String,
}

/// Status and raw body of a backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryResponse {
    pub status: u16,
    pub body: Bytes,
}

impl BinaryResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Success yields the payload; anything else treats the body as the
    /// error detail.
    pub fn into_result(self) -> Result<Bytes> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(BridgeError::UpstreamRequestFailed {
                status: self.status,
                detail: String::from_utf8_lossy(&self.body).into_owned(),
            })
        }
    }
}

/// Backend API collaborator.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn get_binary(&self, request: BinaryRequest) -> Result<BinaryResponse>;
}

/// reqwest-backed implementation.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a backend client for `base_url` with a 30 s request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn get_binary(&self, request: BinaryRequest) -> Result<BinaryResponse> {
        let url = format!("{}{}", self.base_url, request.path);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&request.bearer_token)
            .query(&request.params)
            .send()
            .await
            .map_err(|err| BridgeError::Network(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| BridgeError::Network(err.to_string()))?;

        Ok(BinaryResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_yields_payload() {
        let response = BinaryResponse {
            status: 200,
            body: Bytes::from_static(b"%PDF-1.7"),
        };
        assert_eq!(
            response.into_result().unwrap(),
            Bytes::from_static(b"%PDF-1.7")
        );
    }

    #[test]
    fn test_non_success_body_is_detail() {
        let response = BinaryResponse {
            status: 404,
            body: Bytes::from_static(b"shipment not found"),
        };
        assert_eq!(
            response.into_result().unwrap_err(),
            BridgeError::UpstreamRequestFailed {
                status: 404,
                detail: "shipment not found".into(),
            }
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let backend = HttpBackend::new("https://api.example.com/");
        assert_eq!(backend.base_url(), "https://api.example.com");
    }
}
