//! Configuration module
//!
//! The proxy configuration is read once at startup and never mutated. Every
//! converter and API client is built from an explicit [`ProxyConfig`] so tests
//! can run side by side with different API bases and bucket names.

use std::env;

use crate::constants::{DEFAULT_BUCKET_NAME, DEFAULT_SIGNED_URL_TIMEOUT_SECS};

/// Read-only configuration for the URL mediation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Root of the backend API, without a trailing slash. May be empty, in
    /// which case proxy URLs are root-relative.
    pub api_base: String,
    /// Bucket name stripped from path-style storage URLs.
    pub bucket_name: String,
    /// Timeout applied to signed URL requests.
    pub signed_url_timeout_secs: u64,
}

impl ProxyConfig {
    pub fn new(api_base: impl Into<String>, bucket_name: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            bucket_name: bucket_name.into(),
            signed_url_timeout_secs: DEFAULT_SIGNED_URL_TIMEOUT_SECS,
        }
    }

    pub fn with_signed_url_timeout_secs(mut self, secs: u64) -> Self {
        self.signed_url_timeout_secs = secs;
        self
    }

    /// Load configuration from `.env` and the process environment.
    ///
    /// Variables:
    /// - `API_BASE_URL` (default: empty)
    /// - `STORAGE_CONTAINER_NAME`, falling back to `S3_BUCKET` (default: `property-media`)
    /// - `SIGNED_URL_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("API_BASE_URL")
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        let bucket_name = lookup("STORAGE_CONTAINER_NAME")
            .or_else(|| lookup("S3_BUCKET"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BUCKET_NAME.to_string());

        let signed_url_timeout_secs = lookup("SIGNED_URL_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_SIGNED_URL_TIMEOUT_SECS);

        let config = ProxyConfig::new(api_base, bucket_name)
            .with_signed_url_timeout_secs(signed_url_timeout_secs);

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !self.api_base.is_empty()
            && !self.api_base.starts_with("http://")
            && !self.api_base.starts_with("https://")
        {
            return Err(anyhow::anyhow!(
                "API_BASE_URL must start with http:// or https:// (got '{}')",
                self.api_base
            ));
        }

        if self.bucket_name.is_empty() {
            return Err(anyhow::anyhow!("STORAGE_CONTAINER_NAME must not be empty"));
        }

        if self.bucket_name.contains('/') {
            return Err(anyhow::anyhow!(
                "STORAGE_CONTAINER_NAME must be a bare bucket name without '/'"
            ));
        }

        if self.signed_url_timeout_secs == 0 {
            return Err(anyhow::anyhow!(
                "SIGNED_URL_TIMEOUT_SECS must be greater than zero"
            ));
        }

        Ok(())
    }

    /// Whether the "own API, not yet proxied" classification branch is active.
    pub fn has_api_base(&self) -> bool {
        !self.api_base.is_empty()
    }

    /// Join a route path onto the API base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
