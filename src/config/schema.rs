//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::relay::BodyEncoding;

/// Environment variable holding the destination URL unless overridden.
pub const DEFAULT_DESTINATION_ENV: &str = "GOOGLE_SCRIPT_URL";

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address, route).
    pub listener: ListenerConfig,

    /// Where submissions are forwarded to.
    pub destination: DestinationConfig,

    /// Forwarding behaviour.
    pub relay: RelayModeConfig,

    /// Request limits.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Route that accepts form submissions.
    pub path: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            path: "/contact".to_string(),
        }
    }
}

/// Destination configuration.
///
/// The URL is a secret. It is normally injected through the environment
/// variable named by `url_env`, which takes precedence over `url`.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DestinationConfig {
    /// Destination URL, if set in the file.
    pub url: Option<String>,

    /// Environment variable consulted for the destination URL.
    pub url_env: String,
}

impl Default for DestinationConfig {
    fn default() -> Self {
        Self {
            url: None,
            url_env: DEFAULT_DESTINATION_ENV.to_string(),
        }
    }
}

impl std::fmt::Debug for DestinationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DestinationConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("url_env", &self.url_env)
            .finish()
    }
}

/// Forwarding behaviour.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayModeConfig {
    /// How the inbound body is passed on.
    pub encoding: BodyEncoding,
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum inbound body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 1024 * 1024, // 1MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
