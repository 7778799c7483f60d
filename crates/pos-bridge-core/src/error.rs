// Error taxonomy shared across the workspace.
//
// Construction-time failures (bridge connect, token fetch) surface as `Err`
// to the caller. Flow-level failures (scanner activation, document redirect)
// are caught at the public boundary, logged, and reported via toast.

use thiserror::Error;

/// Errors produced by the bridge utilities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// A required configuration entry is absent (unset variable, unknown shop).
    #[error("Missing configuration: {0}")]
    ConfigurationMissing(String),

    /// No usable app-bridge connection handle was supplied.
    #[error("Invalid App Config")]
    InvalidConfiguration,

    /// The backend answered with a non-success status; the body is the detail.
    #[error("Upstream request failed ({status}): {detail}")]
    UpstreamRequestFailed { status: u16, detail: String },

    /// The session-token handshake with the host platform was rejected.
    #[error("Host handshake failed: {0}")]
    HostHandshakeFailed(String),

    /// The given zone name is not a known IANA time zone.
    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    /// Network-level failure (DNS, connection refused, timeout, TLS).
    #[error("Network error: {0}")]
    Network(String),
}

impl BridgeError {
    /// Missing-configuration error for a named key or shop.
    pub fn missing(key: impl Into<String>) -> Self {
        Self::ConfigurationMissing(key.into())
    }

    /// Returns `true` for errors a startup validation pass should have caught.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationMissing(_) | Self::InvalidConfiguration
        )
    }
}

/// Unified result type for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            BridgeError::missing("POS_BRIDGE_LOGIN_URL").to_string(),
            "Missing configuration: POS_BRIDGE_LOGIN_URL"
        );
        assert_eq!(
            BridgeError::InvalidConfiguration.to_string(),
            "Invalid App Config"
        );
        let err = BridgeError::UpstreamRequestFailed {
            status: 503,
            detail: "upstream busy".into(),
        };
        assert_eq!(err.to_string(), "Upstream request failed (503): upstream busy");
    }

    #[test]
    fn test_configuration_classification() {
        assert!(BridgeError::missing("x").is_configuration());
        assert!(BridgeError::InvalidConfiguration.is_configuration());
        assert!(!BridgeError::Network("refused".into()).is_configuration());
        assert!(!BridgeError::InvalidTimeZone("Mars/Olympus".into()).is_configuration());
    }
}
