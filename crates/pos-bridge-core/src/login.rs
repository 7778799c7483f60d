// Login and dashboard URL construction.

use crate::config::{BridgeConfig, LAUNCHPAD_URL_VAR, LOGIN_URL_VAR};
use crate::error::{BridgeError, Result};
use crate::session::PosSession;

/// Destination URL for an unauthenticated user.
///
/// Embedded sessions land on the launchpad with shop and host as query
/// parameters; everything else gets the plain login URL verbatim. A missing
/// configuration value is an explicit error (validated at startup via
/// [`BridgeConfig::validate`], but lookups stay defensive).
pub fn app_login_url(session: &PosSession, config: &BridgeConfig) -> Result<String> {
    if session.embedded {
        let base = config
            .embedded_launchpad_url
            .as_deref()
            .ok_or_else(|| BridgeError::missing(LAUNCHPAD_URL_VAR))?;
        Ok(format!(
            "{}/?shop={}&host={}",
            base.trim_end_matches('/'),
            session.shop,
            session.host
        ))
    } else {
        config
            .login_url
            .clone()
            .ok_or_else(|| BridgeError::missing(LOGIN_URL_VAR))
    }
}

/// Link into the order-management dashboard for a given instance.
///
/// A bare instance name becomes `https://<name>.hotwax.io`; a full URL keeps
/// its origin, dropping a trailing `/api` path or trailing slash.
pub fn oms_dashboard_url(token: &str, oms: &str) -> String {
    let base = if oms.starts_with("http") {
        oms.strip_suffix("/api/")
            .or_else(|| oms.strip_suffix("/api"))
            .unwrap_or_else(|| oms.trim_end_matches('/'))
            .to_string()
    } else {
        format!("https://{oms}.hotwax.io")
    };

    format!("{base}/commerce/control/main?token={token}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShopCredentials;
    use std::collections::HashMap;

    fn config() -> BridgeConfig {
        let mut shops = HashMap::new();
        shops.insert("acme".to_string(), ShopCredentials { api_key: "k".into() });
        BridgeConfig {
            shops,
            embedded_launchpad_url: Some("https://lp.example".into()),
            login_url: Some("https://login.example/login".into()),
        }
    }

    #[test]
    fn test_embedded_login_url() {
        let session = PosSession::new("acme", "h1", true, "tok");
        assert_eq!(
            app_login_url(&session, &config()).unwrap(),
            "https://lp.example/?shop=acme&host=h1"
        );
    }

    #[test]
    fn test_embedded_login_url_trims_trailing_slash() {
        let mut config = config();
        config.embedded_launchpad_url = Some("https://lp.example/".into());
        let session = PosSession::new("acme", "h1", true, "tok");
        assert_eq!(
            app_login_url(&session, &config).unwrap(),
            "https://lp.example/?shop=acme&host=h1"
        );
    }

    #[test]
    fn test_plain_login_url_is_verbatim() {
        let session = PosSession::new("acme", "h1", false, "tok");
        assert_eq!(
            app_login_url(&session, &config()).unwrap(),
            "https://login.example/login"
        );
    }

    #[test]
    fn test_missing_launchpad_is_explicit() {
        let mut config = config();
        config.embedded_launchpad_url = None;
        let session = PosSession::new("acme", "h1", true, "tok");
        assert_eq!(
            app_login_url(&session, &config).unwrap_err(),
            BridgeError::missing(LAUNCHPAD_URL_VAR)
        );
    }

    #[test]
    fn test_missing_login_url_is_explicit() {
        let mut config = config();
        config.login_url = None;
        let session = PosSession::new("acme", "h1", false, "tok");
        assert_eq!(
            app_login_url(&session, &config).unwrap_err(),
            BridgeError::missing(LOGIN_URL_VAR)
        );
    }

    #[test]
    fn test_oms_dashboard_url_from_name() {
        assert_eq!(
            oms_dashboard_url("tok", "demo"),
            "https://demo.hotwax.io/commerce/control/main?token=tok"
        );
    }

    #[test]
    fn test_oms_dashboard_url_from_full_url() {
        assert_eq!(
            oms_dashboard_url("tok", "https://demo.example.com/api/"),
            "https://demo.example.com/commerce/control/main?token=tok"
        );
        assert_eq!(
            oms_dashboard_url("tok", "https://demo.example.com/"),
            "https://demo.example.com/commerce/control/main?token=tok"
        );
    }
}
