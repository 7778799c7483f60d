// Session context.
//
// The original front-end read shop/host/token from an ambient auth store.
// Here every operation takes the session it needs as an explicit parameter.

use serde::{Deserialize, Serialize};

/// Read-only view of the authenticated session an operation runs under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosSession {
    /// Shop name the app is installed on.
    pub shop: String,
    /// Host identifier handed over by the embedding platform.
    pub host: String,
    /// Whether the app is running embedded in the host platform.
    #[serde(rename = "isEmbedded")]
    pub embedded: bool,
    /// Bearer token for the backend API.
    pub token: String,
}

impl PosSession {
    pub fn new(
        shop: impl Into<String>,
        host: impl Into<String>,
        embedded: bool,
        token: impl Into<String>,
    ) -> Self {
        Self {
            shop: shop.into(),
            host: host.into(),
            embedded,
            token: token.into(),
        }
    }
}
