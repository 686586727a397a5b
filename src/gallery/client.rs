//! Alchemy NFT API client
//!
//! The async driver composing the pipeline: plan -> fetch -> normalize.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::normalizer::normalize;
use super::planner::plan_query;
use super::types::{Nft, SearchInput};
use crate::core::config::UpstreamConfig;
use crate::core::errors::GalleryError;

/// Client for the Alchemy NFT endpoints used by the gallery.
pub struct AlchemyGalleryClient {
    client: Client,
    base_url: String,
}

impl AlchemyGalleryClient {
    /// Build a client from the injected upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, GalleryError> {
        let base_url = config.endpoint_base()?;
        Ok(Self {
            client: http_client(config.request_timeout_secs),
            base_url,
        })
    }

    /// Client pointed at an explicit base URL (mock servers, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(UpstreamConfig::default().request_timeout_secs),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run one submission through the pipeline.
    ///
    /// A plan of kind `None` short-circuits to an empty gallery without any
    /// network call. The client tracks no in-flight state; applying only the
    /// most recent result is the caller's concern.
    pub async fn fetch_gallery(&self, input: &SearchInput) -> Result<Vec<Nft>, GalleryError> {
        let plan = plan_query(&self.base_url, input);
        if plan.is_noop() {
            debug!("search input incomplete, nothing to query");
            return Ok(Vec::new());
        }

        let response = self
            .client
            .get(&plan.url)
            .send()
            .await
            .map_err(|e| GalleryError::Network(format!("Alchemy API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GalleryError::Upstream(format!(
                "Alchemy API error {}: {}",
                status, body
            )));
        }

        let payload: Value = response.json().await.map_err(|e| {
            GalleryError::Upstream(format!("failed to decode Alchemy response: {}", e))
        })?;

        Ok(normalize(plan.kind, &payload))
    }
}

fn http_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_config() {
        let config = UpstreamConfig {
            api_key: Some("test_key".to_string()),
            ..Default::default()
        };
        let client = AlchemyGalleryClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://eth-mainnet.g.alchemy.com/v2/test_key");
    }

    #[test]
    fn test_client_requires_credential() {
        let config = UpstreamConfig::default();
        assert!(AlchemyGalleryClient::new(&config).is_err());
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = AlchemyGalleryClient::with_base_url("http://127.0.0.1:9999/");
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }
}
