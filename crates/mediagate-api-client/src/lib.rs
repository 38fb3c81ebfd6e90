//! HTTP client for the storage proxy backend.
//!
//! Provides a minimal client bound to the configured API base and the signed
//! URL helpers built on it. Proxy URLs for direct-key and vcard access are
//! built without I/O by `mediagate-rewrite`; only signed URLs need a round trip.

pub mod signed_url;

use anyhow::{Context, Result};
use mediagate_core::ProxyConfig;
use reqwest::Client;
use std::time::Duration;

pub use signed_url::{SignedUrlError, SignedUrlResponse};

/// HTTP client for the storage proxy endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `config.api_base`, with the configured request timeout.
    pub fn new(config: &ProxyConfig) -> Result<Self> {
        if !config.has_api_base() {
            return Err(anyhow::anyhow!(
                "API_BASE_URL must be set to request signed URLs"
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.signed_url_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Create client from environment: API_BASE_URL, SIGNED_URL_TIMEOUT_SECS.
    pub fn from_env() -> Result<Self> {
        let config = ProxyConfig::from_env()?;
        Self::new(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Raw client for custom requests.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_api_base() {
        let err = ApiClient::new(&ProxyConfig::new("", "listings")).unwrap_err();
        assert!(err.to_string().contains("API_BASE_URL"));
    }

    #[test]
    fn builds_urls_from_base() {
        let client = ApiClient::new(&ProxyConfig::new("https://api.example.com/", "listings")).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(
            client.build_url("/api/s3-proxy/signed-url"),
            "https://api.example.com/api/s3-proxy/signed-url"
        );
    }
}
