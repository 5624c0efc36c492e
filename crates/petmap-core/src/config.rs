//! Client configuration models.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://ripe-donella-atitus-fbbf314a.koyeb.app";
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 500;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Which gateway backs every call for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayMode {
    Mock,
    Remote,
}

impl std::fmt::Display for GatewayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mock => f.write_str("mock"),
            Self::Remote => f.write_str("remote"),
        }
    }
}

/// Process-wide client configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the backend, without a trailing slash.
    pub api_base_url: String,
    /// Serve every call from the in-process mock instead of the backend.
    pub mock_api: bool,
    /// Simulated latency of the mock gateways.
    pub mock_latency_ms: u64,
    /// Per-request timeout of the remote gateways.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            mock_api: false,
            mock_latency_ms: DEFAULT_MOCK_LATENCY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn gateway_mode(&self) -> GatewayMode {
        if self.mock_api {
            GatewayMode::Mock
        } else {
            GatewayMode::Remote
        }
    }

    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Base URL with any trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_remote() {
        let config = ClientConfig::default();
        assert_eq!(config.gateway_mode(), GatewayMode::Remote);
        assert_eq!(config.mock_latency(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str("mock_api = true").unwrap();
        assert_eq!(config.gateway_mode(), GatewayMode::Mock);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let config = ClientConfig {
            api_base_url: "http://localhost:8080//".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(config.base_url(), "http://localhost:8080");
    }
}
