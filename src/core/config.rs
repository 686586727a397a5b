//! Service configuration
//!
//! The upstream base URL carries the API credential, so it is always
//! injected here (config file or environment) and never embedded in code.

use serde::{Deserialize, Serialize};

use crate::core::errors::GalleryError;

/// Upstream Alchemy API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Full base URL override, credential included. Takes precedence over
    /// `network` + `api_key` (used to point at mock servers or proxies).
    #[serde(default)]
    pub base_url: Option<String>,

    /// Network name ("eth", "polygon", ...)
    #[serde(default = "UpstreamConfig::default_network")]
    pub network: String,

    /// Alchemy API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout (seconds)
    #[serde(default = "UpstreamConfig::default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl UpstreamConfig {
    fn default_network() -> String {
        "eth".to_string()
    }

    fn default_request_timeout() -> u64 {
        15
    }

    /// Resolve the credential-bearing base URL all upstream paths hang off.
    pub fn endpoint_base(&self) -> Result<String, GalleryError> {
        if let Some(base) = &self.base_url {
            return Ok(base.trim_end_matches('/').to_string());
        }

        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GalleryError::Config("no Alchemy API key configured".to_string())
        })?;

        Ok(format!(
            "https://{}-mainnet.g.alchemy.com/v2/{}",
            self.network, api_key
        ))
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            network: Self::default_network(),
            api_key: None,
            request_timeout_secs: Self::default_request_timeout(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,

    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
}

impl ServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8888
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

/// Top-level gallery service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Fetch the Alchemy API key from the environment.
///
/// Checks the network-specific variable first, then the generic one.
pub fn resolve_alchemy_api_key(network: &str) -> Option<String> {
    let env_var = format!("ALCHEMY_API_KEY_{}", network.to_uppercase());
    std::env::var(&env_var)
        .ok()
        .or_else(|| std::env::var("ALCHEMY_API_KEY").ok())
}
