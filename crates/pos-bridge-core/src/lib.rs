//! # pos-bridge-core
//!
//! Core building blocks for retail POS companion apps that run embedded in a
//! commerce host platform: the error taxonomy, process configuration, the
//! session context handed to every operation, and the small pure utilities
//! (time formatting, product identifier resolution, login/dashboard URL
//! construction, localized messages).
//!
//! Everything here is collaborator-free. The host app-bridge, notification,
//! and backend API collaborators live in `pos-bridge-client`.

pub mod config;
pub mod error;
pub mod i18n;
pub mod login;
pub mod product;
pub mod session;
pub mod time;

pub use config::{BridgeConfig, ShopCredentials};
pub use error::{BridgeError, Result};
pub use session::PosSession;
